use ghost_core::CoreError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("missing #{id} in document")]
    MissingElement { id: String },
    #[error("#{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("{0} context unavailable")]
    ContextUnavailable(&'static str),
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("shader program failed to link: {log}")]
    ProgramLink { log: String },
    #[error("could not create {0}")]
    ResourceCreation(&'static str),
    #[error("js error: {0}")]
    Js(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<JsValue> for EffectError {
    fn from(v: JsValue) -> Self {
        EffectError::Js(format!("{:?}", v))
    }
}

impl From<EffectError> for JsValue {
    fn from(e: EffectError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
