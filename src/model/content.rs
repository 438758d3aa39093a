//! Catalog records and the book views derived from them

use serde::Deserialize;

const NOT_AVAILABLE: &str = "N/A";

/// Body of a `GET volumes` response
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    /// Absent when the query matched nothing
    #[serde(default)]
    pub items: Vec<Volume>,
    #[serde(default)]
    pub total_items: u32,
}

/// A single external volume record
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub published_date: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
    pub preview_link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

/// One page of catalog results as returned by the client
#[derive(Clone, Debug, Default)]
pub struct CatalogPage {
    pub volumes: Vec<Volume>,
    pub total_items: u32,
}

impl From<VolumesResponse> for CatalogPage {
    fn from(response: VolumesResponse) -> Self {
        Self {
            volumes: response.items,
            total_items: response.total_items,
        }
    }
}

/// The fields shown for a book in the result list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub published_year: String,
    pub cover_image_url: Option<String>,
}

impl BookSummary {
    pub fn from_volume(volume: &Volume) -> Self {
        let info = &volume.volume_info;

        let title = info
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("No Title")
            .to_string();

        let authors = if info.authors.is_empty() {
            "Unknown Author".to_string()
        } else {
            info.authors.join(", ")
        };

        let published_year = info
            .published_date
            .as_deref()
            .and_then(extract_year)
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let cover_image_url = info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_ref().or(links.small_thumbnail.as_ref()))
            .map(|url| url.replace("http://", "https://"));

        Self {
            id: volume.id.clone(),
            title,
            authors,
            published_year,
            cover_image_url,
        }
    }
}

/// Everything the detail overlay shows. Never stored, always derived
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDetail {
    pub summary: BookSummary,
    pub publisher: String,
    pub published_date: String,
    pub page_count: String,
    pub isbn: String,
    pub description: String,
    pub preview_link: Option<String>,
}

impl BookDetail {
    pub fn from_volume(volume: &Volume) -> Self {
        let info = &volume.volume_info;

        Self {
            summary: BookSummary::from_volume(volume),
            publisher: info.publisher.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            published_date: info
                .published_date
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            page_count: info
                .page_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            isbn: preferred_isbn(&info.industry_identifiers)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            description: info
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description available.".to_string()),
            preview_link: info.preview_link.clone(),
        }
    }
}

/// The result list currently on screen
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    pub items: Vec<BookSummary>,
    pub total_count: u32,
    /// Source records kept so details can be derived on demand
    records: Vec<Volume>,
}

impl SearchResult {
    pub fn from_page(page: CatalogPage) -> Self {
        Self {
            items: page.volumes.iter().map(BookSummary::from_volume).collect(),
            total_count: page.total_items,
            records: page.volumes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn detail(&self, id: &str) -> Option<BookDetail> {
        self.records
            .iter()
            .find(|volume| volume.id == id)
            .map(BookDetail::from_volume)
    }
}

fn extract_year(date: &str) -> Option<&str> {
    let year = date.get(..4)?;
    year.chars().all(|c| c.is_ascii_digit()).then_some(year)
}

fn preferred_isbn(identifiers: &[IndustryIdentifier]) -> Option<&str> {
    ["ISBN_13", "ISBN_10"].iter().find_map(|kind| {
        identifiers
            .iter()
            .find(|id| id.kind == *kind)
            .map(|id| id.identifier.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "zyTCAlFPjgYC",
                "volumeInfo": {
                    "title": "The Google Story",
                    "authors": ["David A. Vise", "Mark Malseed"],
                    "publisher": "Random House",
                    "publishedDate": "2005-11-15",
                    "description": "Here is the story behind one of the most remarkable Internet successes.",
                    "industryIdentifiers": [
                        {"type": "ISBN_10", "identifier": "055380457X"},
                        {"type": "ISBN_13", "identifier": "9780553804577"}
                    ],
                    "pageCount": 207,
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small",
                        "thumbnail": "http://books.google.com/thumb"
                    },
                    "previewLink": "http://books.google.com/books?id=zyTCAlFPjgYC"
                }
            },
            {
                "id": "bare",
                "volumeInfo": {}
            }
        ]
    }"#;

    #[test]
    fn test_decode_volumes_response() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.total_items, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].volume_info.page_count, Some(207));
    }

    #[test]
    fn test_missing_items_means_no_results() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.total_items, 0);
    }

    #[test]
    fn test_summary_projection() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let summary = BookSummary::from_volume(&response.items[0]);

        assert_eq!(summary.id, "zyTCAlFPjgYC");
        assert_eq!(summary.authors, "David A. Vise, Mark Malseed");
        assert_eq!(summary.published_year, "2005");
        assert_eq!(
            summary.cover_image_url.as_deref(),
            Some("https://books.google.com/thumb")
        );
    }

    #[test]
    fn test_summary_fallbacks() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let summary = BookSummary::from_volume(&response.items[1]);

        assert_eq!(summary.title, "No Title");
        assert_eq!(summary.authors, "Unknown Author");
        assert_eq!(summary.published_year, "N/A");
        assert!(summary.cover_image_url.is_none());
    }

    #[test]
    fn test_detail_prefers_isbn_13() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let detail = BookDetail::from_volume(&response.items[0]);

        assert_eq!(detail.isbn, "9780553804577");
        assert_eq!(detail.publisher, "Random House");
        assert_eq!(detail.page_count, "207");

        let bare = BookDetail::from_volume(&response.items[1]);
        assert_eq!(bare.isbn, "N/A");
        assert_eq!(bare.description, "No description available.");
        assert!(bare.preview_link.is_none());
    }

    #[test]
    fn test_search_result_derives_detail_by_id() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let result = SearchResult::from_page(response.into());

        assert!(result.contains("bare"));
        assert!(!result.contains("missing"));
        assert_eq!(
            result.detail("zyTCAlFPjgYC").map(|d| d.summary.title),
            Some("The Google Story".to_string())
        );
        assert!(result.detail("missing").is_none());
    }
}
