//! JSON-RPC request validation.

use crate::types::{JsonRpcRequest, McpError, McpResult, JSONRPC_VERSION};

pub fn validate_request(request: &JsonRpcRequest) -> McpResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{}\"",
            request.jsonrpc
        )));
    }

    if request.method.trim().is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestId;

    fn request(jsonrpc: &str, method: &str) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: jsonrpc.to_string(),
            id: RequestId::Number(1),
            method: method.to_string(),
            params: None,
        }
    }

    #[test]
    fn test_accepts_well_formed() {
        assert!(validate_request(&request("2.0", "ping")).is_ok());
    }

    #[test]
    fn test_rejects_wrong_version() {
        let err = validate_request(&request("1.0", "ping")).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_rejects_blank_method() {
        assert!(validate_request(&request("2.0", "")).is_err());
        assert!(validate_request(&request("2.0", "  ")).is_err());
    }
}
