use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown script target '{0}' (expected dell, hp, lenovo or auto)")]
    UnknownTarget(String),
}

pub type ScriptResult<T> = Result<T, ScriptError>;

#[cfg(test)]
mod test {
    use crate::errors::ScriptError;
    use pretty_assertions::assert_eq;

    #[test]
    fn display() {
        let err = ScriptError::UnknownTarget("acer".to_string());
        assert_eq!(
            err.to_string(),
            "unknown script target 'acer' (expected dell, hp, lenovo or auto)"
        );
    }
}
