#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("advice.generation_failed")]
    GenerationFailed,
}
