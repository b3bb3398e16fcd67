use crate::error::ReqcurlError;

pub fn exit_code_for_error(err: &ReqcurlError) -> i32 {
    match err {
        ReqcurlError::InvalidUrl(_) => 3,
        ReqcurlError::PayloadShape(_) | ReqcurlError::Config(_) => 2,
        ReqcurlError::Timeout => 28,
        ReqcurlError::Io(_) => 23,
        ReqcurlError::Json(_) => 26,
        ReqcurlError::Http(err) => http_exit_code(err),
    }
}

fn http_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    if err.is_request() || err.is_builder() {
        return 2;
    }
    56
}

#[cfg(test)]
mod tests {
    use super::exit_code_for_error;
    use crate::error::ReqcurlError;

    #[test]
    fn exit_code_maps_invalid_url() {
        let err = ReqcurlError::InvalidUrl("bad".to_string());
        assert_eq!(exit_code_for_error(&err), 3);
    }

    #[test]
    fn exit_code_maps_timeout() {
        assert_eq!(exit_code_for_error(&ReqcurlError::Timeout), 28);
    }

    #[test]
    fn exit_code_maps_payload_shape() {
        let err = ReqcurlError::PayloadShape("42".to_string());
        assert_eq!(exit_code_for_error(&err), 2);
    }
}
