#[cfg(test)]
mod tests {
    use rust_groth16_compress_bls12_381::errors::CompressionError;

    #[test]
    fn test_curve_lookup_error() {
        let msg = String::from("unsupported curve \"bn128\"");
        let error = CompressionError::CurveLookupError(msg.clone());
        assert_eq!(format!("{}", error), format!("curve lookup error: {}", msg));
    }

    #[test]
    fn test_field_error() {
        let msg = String::from("test field error");
        let error = CompressionError::FieldError(msg.clone());
        assert_eq!(format!("{}", error), format!("field error: {}", msg));
    }

    #[test]
    fn test_not_on_curve_error() {
        let msg = String::from("x^3 + b has no square root");
        let error = CompressionError::NotOnCurveError(msg.clone());
        assert_eq!(format!("{}", error), format!("not on curve error: {}", msg));
    }

    #[test]
    fn test_serialization_error() {
        let msg = String::from("test serialization error");
        let error = CompressionError::SerializationError(msg.clone());
        assert_eq!(
            format!("{}", error),
            format!("serialization error: {}", msg)
        );
    }

    #[test]
    fn test_element_compression_error() {
        let error = CompressionError::ElementCompressionError {
            index: 7,
            source: Box::new(CompressionError::FieldError(String::from("bad"))),
        };
        assert_eq!(
            format!("{}", error),
            "element compression error at index 7: field error: bad"
        );
    }

    #[test]
    fn test_compression_error_equality() {
        let error1 = CompressionError::CurveLookupError(String::from("error"));
        let error2 = CompressionError::CurveLookupError(String::from("error"));
        let error3 = CompressionError::FieldError(String::from("error"));
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
