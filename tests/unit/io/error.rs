//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use cellgrid::AutomatonError;
    use cellgrid::io::error::{WithGeneration, configuration_error, rule_parse_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AutomatonError::FileSystem {
            path: "/tmp/rules.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(configuration_error(&"bad").source().is_none());
    }

    // Tests InvalidState error formatting
    // Verified by omitting the coordinate from message
    #[test]
    fn test_invalid_state_message() {
        let error = AutomatonError::InvalidState {
            row: 3,
            col: 4,
            state: 9,
            state_count: 2,
        };

        let message = error.to_string();
        assert!(message.contains("State 9"));
        assert!(message.contains("(3, 4)"));
    }

    // Tests OutOfRange and DimensionMismatch report sizes as rows x cols
    // Verified by swapping the dimension order in messages
    #[test]
    fn test_size_messages() {
        let out_of_range = AutomatonError::OutOfRange {
            row: -1,
            col: 2,
            dimensions: (3, 5),
        };
        assert!(out_of_range.to_string().contains("(-1, 2)"));
        assert!(out_of_range.to_string().contains("3x5"));

        let mismatch = AutomatonError::DimensionMismatch {
            expected: (3, 5),
            found: (4, 6),
        };
        let message = mismatch.to_string();
        assert!(message.contains("4x6"));
        assert!(message.contains("3x5"));
    }

    // Tests rule parse errors keep the original rulestring
    // Verified by storing the trimmed rule
    #[test]
    fn test_rule_parse_error() {
        let error = rule_parse_error(" B9x", &"bad digit");
        assert!(matches!(&error, AutomatonError::RuleParse { rule, .. } if rule == " B9x"));
        assert!(error.to_string().contains("bad digit"));
    }

    // Tests step errors chain to the engine error
    // Verified by returning None from source for Step
    #[test]
    fn test_step_error_chains() {
        let result: cellgrid::Result<()> = Err(configuration_error(&"broken"));
        let error = result.with_generation(7).expect_err("error is kept");

        assert!(error.to_string().contains("generation 7"));
        let source = error.source().expect("step has a source");
        assert!(source.to_string().contains("broken"));
        assert!(!error.is_recoverable());
    }

    // Tests conversion from io::Error
    // Verified by mapping io errors to Configuration
    #[test]
    fn test_from_io_error() {
        let error = AutomatonError::from(std::io::Error::other("disk full"));
        assert!(matches!(error, AutomatonError::FileSystem { .. }));
    }
}
