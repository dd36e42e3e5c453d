/// Error code registry for the dispatcher
///
/// Error codes are organized by category:
/// - 1000-1999: Invocation errors (wrong CLI shape)
/// - 2000-2999: Namespace resolution errors
/// - 3000-3999: Argument decoding errors
/// - 4000-4999: Callable resolution errors
/// - 5000-5999: Callable execution errors
/// - 6000-6999: Output errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Invocation errors (1000-1999)
    pub const INVOCATION_GENERIC: u16 = 1000;
    pub const INVOCATION_TOO_FEW_ARGS: u16 = 1001;
    pub const INVOCATION_TOO_MANY_ARGS: u16 = 1002;

    // Namespace errors (2000-2999)
    pub const NAMESPACE_GENERIC: u16 = 2000;
    pub const NAMESPACE_NOT_FOUND: u16 = 2001;

    // Decode errors (3000-3999)
    pub const DECODE_GENERIC: u16 = 3000;
    pub const DECODE_INVALID_ARGUMENT_LIST: u16 = 3001;
    pub const DECODE_NON_STRING_ELEMENT: u16 = 3002;
    pub const DECODE_INVALID_ARGUMENT: u16 = 3003;

    // Callable resolution errors (4000-4999)
    pub const CALLABLE_GENERIC: u16 = 4000;
    pub const CALLABLE_MISSING: u16 = 4001;
    pub const CALLABLE_NOT_FUNCTION: u16 = 4002;

    // Execution errors (5000-5999)
    pub const EXEC_GENERIC: u16 = 5000;
    pub const EXEC_ARGUMENT_MISMATCH: u16 = 5001;
    pub const EXEC_TYPE_MISMATCH: u16 = 5002;
    pub const EXEC_DOMAIN: u16 = 5003;

    // Output errors (6000-6999)
    pub const OUTPUT_GENERIC: u16 = 6000;
    pub const OUTPUT_WRITE_FAILED: u16 = 6001;
    pub const OUTPUT_SERIALIZATION_FAILED: u16 = 6002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Invocation errors
        1000 => "Generic invocation error",
        1001 => "Too few command-line arguments",
        1002 => "Too many command-line arguments",

        // Namespace errors
        2000 => "Generic namespace error",
        2001 => "Namespace is not registered",

        // Decode errors
        3000 => "Generic argument decode error",
        3001 => "Argument list is not a valid JSON array",
        3002 => "Argument list element is not a JSON string",
        3003 => "Argument is not valid JSON",

        // Callable resolution errors
        4000 => "Generic callable resolution error",
        4001 => "Callable does not exist in namespace",
        4002 => "Namespace member is not a function",

        // Execution errors
        5000 => "Callable failed",
        5001 => "Callable received the wrong number of arguments",
        5002 => "Callable received an argument of the wrong type",
        5003 => "Callable rejected an argument value",

        // Output errors
        6000 => "Generic output error",
        6001 => "Failed to write output",
        6002 => "Failed to serialize output",

        _ => "Unknown error code",
    }
}
