//! Turning a phrase and page number into catalog request parameters

/// A search as submitted by the user. `phrase` is already trimmed and non-empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub phrase: String,
    pub page: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestParams {
    pub encoded_phrase: String,
    pub offset: u32,
    pub page_size: u32,
}

impl RequestParams {
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}?q={}&startIndex={}&maxResults={}",
            base_url, self.encoded_phrase, self.offset, self.page_size
        )
    }
}

/// Compute request parameters for one page of results.
///
/// Callers guarantee `page >= 1` and `page_size >= 1`.
pub fn build_request(phrase: &str, page: u32, page_size: u32) -> RequestParams {
    RequestParams {
        encoded_phrase: urlencoding::encode(phrase).into_owned(),
        offset: page.saturating_sub(1) * page_size,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_page_minus_one_times_size() {
        for page in 1..=50 {
            for size in [1, 10, 40] {
                let params = build_request("rust", page, size);
                assert_eq!(params.offset, (page - 1) * size);
                assert_eq!(params.page_size, size);
            }
        }
    }

    #[test]
    fn test_phrase_is_url_encoded() {
        let params = build_request("harry potter & the stone", 1, 10);
        assert_eq!(params.encoded_phrase, "harry%20potter%20%26%20the%20stone");
    }

    #[test]
    fn test_url_layout() {
        let params = build_request("dune", 3, 10);
        assert_eq!(
            params.to_url("https://www.googleapis.com/books/v1/volumes"),
            "https://www.googleapis.com/books/v1/volumes?q=dune&startIndex=20&maxResults=10"
        );
    }
}
