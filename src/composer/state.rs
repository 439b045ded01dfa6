use std::cmp::Ordering;
use std::time::{Duration, Instant};
use crate::catalog::dto::{CatalogPageDto, PaginationDto, RecordDto, SampleSetDto};
use crate::composer::{SortDirection, SortField};
use crate::core::inventory::StockFilter;
use crate::utils::numeric::parse_count;

// Keystrokes only become query-effective after this much quiescence.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, PartialEq, Clone)]
pub(crate) struct CatalogRequest {
    pub seq: u64,
    pub search: String,
    pub stock_filter: StockFilter,
    pub publisher: Option<String>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub(crate) struct SampleRequest {
    pub seq: u64,
    pub count: usize,
    pub include_out_of_stock: bool,
}

#[derive(Debug, Default)]
struct StreamState {
    loading: bool,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct InflightCatalog {
    seq: u64,
    search_focused: bool,
}

// QueryComposer models the client driving the catalog endpoints: it
// debounces search input, issues sequenced requests, discards out-of-order
// responses, and applies a page-local secondary sort. Time is passed in
// explicitly so the whole machine stays deterministic. The transport never
// guarantees completion order; the sequence guard below is the only defense
// against a late response clobbering a newer one.
pub(crate) struct QueryComposer {
    raw_search: String,
    debounced_search: String,
    pending_search_since: Option<Instant>,
    stock_filter: StockFilter,
    publisher: Option<String>,
    page: usize,
    limit: usize,
    next_seq: u64,
    catalog_inflight: Option<InflightCatalog>,
    sample_inflight: Option<u64>,
    catalog_state: StreamState,
    sample_state: StreamState,
    items: Vec<RecordDto>,
    pagination: Option<PaginationDto>,
    recommendations: Vec<RecordDto>,
    sort: Option<(SortField, SortDirection)>,
    search_focused: bool,
    focus_restore: bool,
}

impl QueryComposer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            raw_search: String::new(),
            debounced_search: String::new(),
            pending_search_since: None,
            stock_filter: StockFilter::All,
            publisher: None,
            page: 1,
            limit,
            next_seq: 0,
            catalog_inflight: None,
            sample_inflight: None,
            catalog_state: StreamState::default(),
            sample_state: StreamState::default(),
            items: Vec::new(),
            pagination: None,
            recommendations: Vec::new(),
            sort: None,
            search_focused: false,
            focus_restore: false,
        }
    }

    pub(crate) fn set_search_focus(&mut self, focused: bool) {
        self.search_focused = focused;
    }

    // Records a keystroke; the quiescence window restarts on every call.
    pub(crate) fn input_search(&mut self, text: &str, now: Instant) {
        self.raw_search = text.to_string();
        if self.raw_search == self.debounced_search {
            self.pending_search_since = None;
        } else {
            self.pending_search_since = Some(now);
        }
    }

    // Promotes the raw input to the debounced value once it has been quiet
    // long enough; a committed search resets the page to 1 and issues a
    // query. Intermediate keystrokes never issue anything.
    pub(crate) fn poll_debounce(&mut self, now: Instant) -> Option<CatalogRequest> {
        let since = self.pending_search_since?;
        if now.duration_since(since) < SEARCH_DEBOUNCE {
            return None;
        }
        self.pending_search_since = None;
        self.debounced_search = self.raw_search.clone();
        self.page = 1;
        Some(self.issue_catalog())
    }

    pub(crate) fn set_stock_filter(&mut self, filter: StockFilter) -> CatalogRequest {
        self.stock_filter = filter;
        self.page = 1;
        self.issue_catalog()
    }

    pub(crate) fn set_publisher(&mut self, publisher: Option<&str>) -> CatalogRequest {
        self.publisher = publisher.map(str::to_string);
        self.page = 1;
        self.issue_catalog()
    }

    // Page-only change: filters stay put.
    pub(crate) fn set_page(&mut self, page: usize) -> CatalogRequest {
        self.page = page;
        self.issue_catalog()
    }

    fn issue_catalog(&mut self) -> CatalogRequest {
        let seq = self.bump_seq();
        self.catalog_inflight = Some(InflightCatalog {
            seq,
            search_focused: self.search_focused,
        });
        self.catalog_state.loading = true;
        CatalogRequest {
            seq,
            search: self.debounced_search.clone(),
            stock_filter: self.stock_filter,
            publisher: self.publisher.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub(crate) fn issue_sample(&mut self, count: usize, include_out_of_stock: bool) -> SampleRequest {
        let seq = self.bump_seq();
        self.sample_inflight = Some(seq);
        self.sample_state.loading = true;
        SampleRequest {
            seq,
            count,
            include_out_of_stock,
        }
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    // Applies a catalog response only when it answers the most recently
    // issued catalog request; late responses are discarded wholesale.
    pub(crate) fn apply_catalog(&mut self, seq: u64, page: &CatalogPageDto) -> bool {
        let inflight = match self.catalog_inflight {
            Some(inflight) if inflight.seq == seq => inflight,
            _ => return false,
        };
        self.catalog_inflight = None;
        self.items = page.items.clone();
        self.pagination = Some(page.pagination.clone());
        self.catalog_state.loading = false;
        self.catalog_state.error = None;
        if inflight.search_focused {
            self.focus_restore = true;
        }
        true
    }

    pub(crate) fn fail_catalog(&mut self, seq: u64, message: &str) -> bool {
        match self.catalog_inflight {
            Some(inflight) if inflight.seq == seq => {
                self.catalog_inflight = None;
                self.catalog_state.loading = false;
                self.catalog_state.error = Some(message.to_string());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn apply_sample(&mut self, seq: u64, set: &SampleSetDto) -> bool {
        match self.sample_inflight {
            Some(inflight) if inflight == seq => {
                self.sample_inflight = None;
                self.recommendations = set.recommendations.clone();
                self.sample_state.loading = false;
                self.sample_state.error = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn fail_sample(&mut self, seq: u64, message: &str) -> bool {
        match self.sample_inflight {
            Some(inflight) if inflight == seq => {
                self.sample_inflight = None;
                self.sample_state.loading = false;
                self.sample_state.error = Some(message.to_string());
                true
            }
            _ => false,
        }
    }

    // Selecting a new field sorts ascending; re-selecting the active field
    // flips the direction.
    pub(crate) fn toggle_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some((active, direction)) if active == field => Some((field, direction.flipped())),
            _ => Some((field, SortDirection::Ascending)),
        };
    }

    // The sort is page-local: it reorders only the currently loaded items,
    // never the full filtered set on the server.
    pub(crate) fn visible_items(&self) -> Vec<RecordDto> {
        let mut items = self.items.clone();
        if let Some((field, direction)) = self.sort {
            items.sort_by(|a, b| {
                let ordering = compare(a, b, field);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        items
    }

    pub(crate) fn take_focus_restore(&mut self) -> bool {
        std::mem::take(&mut self.focus_restore)
    }

    pub(crate) fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn stock_filter(&self) -> StockFilter {
        self.stock_filter
    }

    pub(crate) fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub(crate) fn sort(&self) -> Option<(SortField, SortDirection)> {
        self.sort
    }

    pub(crate) fn catalog_loading(&self) -> bool {
        self.catalog_state.loading
    }

    pub(crate) fn catalog_error(&self) -> Option<&str> {
        self.catalog_state.error.as_deref()
    }

    pub(crate) fn sample_loading(&self) -> bool {
        self.sample_state.loading
    }

    pub(crate) fn sample_error(&self) -> Option<&str> {
        self.sample_state.error.as_deref()
    }

    pub(crate) fn recommendations(&self) -> &[RecordDto] {
        &self.recommendations
    }

    pub(crate) fn pagination(&self) -> Option<&PaginationDto> {
        self.pagination.as_ref()
    }
}

fn compare(a: &RecordDto, b: &RecordDto, field: SortField) -> Ordering {
    if field.is_numeric() {
        let (left, right) = match field {
            SortField::Price => (parse_count(a.price.as_str()), parse_count(b.price.as_str())),
            _ => (parse_count(a.stock.as_str()), parse_count(b.stock.as_str())),
        };
        left.cmp(&right)
    } else {
        let (left, right) = match field {
            SortField::Title => (a.title.as_str(), b.title.as_str()),
            SortField::Author => (a.author.as_str(), b.author.as_str()),
            _ => (a.publisher.as_str(), b.publisher.as_str()),
        };
        left.cmp(right)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use crate::catalog::dto::{CatalogPageDto, PaginationDto, RecordDto, SampleSetDto};
    use crate::composer::state::{QueryComposer, SEARCH_DEBOUNCE};
    use crate::composer::{SortDirection, SortField};
    use crate::core::inventory::StockFilter;

    fn record(id: &str, title: &str, price: &str, stock: &str) -> RecordDto {
        RecordDto {
            id: id.to_string(),
            isbn: format!("isbn-{}", id),
            title: title.to_string(),
            author: "author".to_string(),
            publisher: "publisher".to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    fn page(items: Vec<RecordDto>) -> CatalogPageDto {
        let total = items.len();
        CatalogPageDto {
            items,
            pagination: PaginationDto {
                page: 1,
                limit: 20,
                total,
                total_pages: 1,
                has_next: false,
                has_prev: false,
            },
            last_updated: "2024-05-01T00:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_should_debounce_search_input() {
        let mut composer = QueryComposer::new(20);
        let t0 = Instant::now();
        composer.input_search("ru", t0);
        composer.input_search("rust", t0 + Duration::from_millis(200));

        // first keystroke is older than the window but was superseded
        assert!(composer.poll_debounce(t0 + Duration::from_millis(350)).is_none());

        let req = composer.poll_debounce(t0 + Duration::from_millis(501))
            .expect("should issue after quiescence");
        assert_eq!("rust", req.search.as_str());
        assert_eq!(1, req.page);

        // committed value does not re-issue
        assert!(composer.poll_debounce(t0 + Duration::from_millis(900)).is_none());
    }

    #[tokio::test]
    async fn test_should_not_issue_when_input_returns_to_committed_value() {
        let mut composer = QueryComposer::new(20);
        let t0 = Instant::now();
        composer.input_search("rust", t0);
        assert!(composer.poll_debounce(t0 + SEARCH_DEBOUNCE).is_some());
        composer.input_search("rus", t0 + Duration::from_millis(400));
        composer.input_search("rust", t0 + Duration::from_millis(450));
        assert!(composer.poll_debounce(t0 + Duration::from_millis(800)).is_none());
    }

    #[tokio::test]
    async fn test_should_reset_page_on_filter_change_but_not_on_page_change() {
        let mut composer = QueryComposer::new(20);
        let req = composer.set_page(3);
        assert_eq!(3, req.page);

        let req = composer.set_stock_filter(StockFilter::InStock);
        assert_eq!(1, req.page);
        assert_eq!(StockFilter::InStock, req.stock_filter);

        let req = composer.set_page(2);
        assert_eq!(2, req.page);
        assert_eq!(StockFilter::InStock, req.stock_filter);

        let req = composer.set_publisher(Some("Hanbit"));
        assert_eq!(1, req.page);
        assert_eq!(Some("Hanbit".to_string()), req.publisher);
        assert_eq!(StockFilter::InStock, req.stock_filter);
    }

    #[tokio::test]
    async fn test_should_discard_stale_catalog_response() {
        let mut composer = QueryComposer::new(20);
        let first = composer.set_page(1);
        let second = composer.set_page(2);
        assert!(second.seq > first.seq);

        let newer = page(vec![record("2", "Newer", "1,000", "1")]);
        assert!(composer.apply_catalog(second.seq, &newer));

        // the older in-flight response resolves late and is discarded
        let older = page(vec![record("1", "Older", "1,000", "1")]);
        assert!(!composer.apply_catalog(first.seq, &older));
        assert_eq!("Newer", composer.visible_items()[0].title.as_str());
        assert!(!composer.catalog_loading());
    }

    #[tokio::test]
    async fn test_should_discard_stale_catalog_error() {
        let mut composer = QueryComposer::new(20);
        let first = composer.set_page(1);
        let second = composer.set_page(2);
        assert!(composer.apply_catalog(second.seq, &page(vec![])));
        assert!(!composer.fail_catalog(first.seq, "late failure"));
        assert!(composer.catalog_error().is_none());
    }

    #[tokio::test]
    async fn test_should_track_catalog_and_sample_streams_independently() {
        let mut composer = QueryComposer::new(20);
        let catalog_req = composer.set_page(1);
        let sample_req = composer.issue_sample(5, false);
        assert!(composer.catalog_loading());
        assert!(composer.sample_loading());

        assert!(composer.fail_sample(sample_req.seq, "sample down"));
        assert!(composer.sample_error().is_some());
        assert!(composer.catalog_error().is_none());

        assert!(composer.apply_catalog(catalog_req.seq, &page(vec![record("1", "A", "1", "1")])));
        assert!(composer.catalog_error().is_none());
        assert_eq!(Some("sample down"), composer.sample_error());

        let sample_req = composer.issue_sample(5, false);
        let set = SampleSetDto {
            recommendations: vec![record("1", "A", "1", "1")],
            total: 1,
            last_updated: "2024-05-01T00:00:00+00:00".to_string(),
        };
        assert!(composer.apply_sample(sample_req.seq, &set));
        assert_eq!(1, composer.recommendations().len());
        assert!(composer.sample_error().is_none());
    }

    #[tokio::test]
    async fn test_should_sort_loaded_page_only() {
        let mut composer = QueryComposer::new(20);
        let req = composer.set_page(1);
        let loaded = page(vec![
            record("1", "B side", "12,000", "3"),
            record("2", "A side", "9,800", "0"),
            record("3", "C side", "101,000", "1"),
        ]);
        assert!(composer.apply_catalog(req.seq, &loaded));

        composer.toggle_sort(SortField::Title);
        let titles: Vec<String> = composer.visible_items().iter().map(|r| r.title.clone()).collect();
        assert_eq!(vec!["A side", "B side", "C side"], titles);

        // numeric sort strips separators instead of comparing lexicographically
        composer.toggle_sort(SortField::Price);
        assert_eq!(Some((SortField::Price, SortDirection::Ascending)), composer.sort());
        let prices: Vec<String> = composer.visible_items().iter().map(|r| r.price.clone()).collect();
        assert_eq!(vec!["9,800", "12,000", "101,000"], prices);

        composer.toggle_sort(SortField::Price);
        assert_eq!(Some((SortField::Price, SortDirection::Descending)), composer.sort());
        let prices: Vec<String> = composer.visible_items().iter().map(|r| r.price.clone()).collect();
        assert_eq!(vec!["101,000", "12,000", "9,800"], prices);
    }

    #[tokio::test]
    async fn test_should_restore_focus_only_when_search_was_focused_at_issue() {
        let mut composer = QueryComposer::new(20);
        let req = composer.set_page(1);
        assert!(composer.apply_catalog(req.seq, &page(vec![])));
        assert!(!composer.take_focus_restore());

        composer.set_search_focus(true);
        let t0 = Instant::now();
        composer.input_search("rust", t0);
        let req = composer.poll_debounce(t0 + SEARCH_DEBOUNCE).expect("should issue");
        composer.set_search_focus(false);
        assert!(composer.apply_catalog(req.seq, &page(vec![])));
        assert!(composer.take_focus_restore());
        // the flag is cleared once taken
        assert!(!composer.take_focus_restore());
    }
}
