use async_trait::async_trait;
use crate::core::inventory::InventoryError;

#[derive(Debug)]
pub enum CommandError {
    Upstream {
        message: String,
        status: Option<u16>,
        retryable: bool,
    },
    Parse {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<InventoryError> for CommandError {
    fn from(other: InventoryError) -> Self {
        match other {
            InventoryError::UpstreamFetch { message, status, retryable } => {
                CommandError::Upstream { message, status, retryable }
            }
            InventoryError::Parse { message } => {
                CommandError::Parse { message }
            }
            InventoryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            InventoryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            InventoryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::inventory::InventoryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Upstream { message: "test".to_string(), status: None, retryable: false };
        let _ = CommandError::Parse { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_inventory_error() {
        assert!(matches!(CommandError::from(InventoryError::upstream_fetch("test", None, false)), CommandError::Upstream { .. }));
        assert!(matches!(CommandError::from(InventoryError::parse("test")), CommandError::Parse { .. }));
        assert!(matches!(CommandError::from(InventoryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(InventoryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(InventoryError::runtime("test", None)), CommandError::Runtime { .. }));
    }
}
