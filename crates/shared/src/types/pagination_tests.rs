use rstest::rstest;

use super::*;

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_request_offset() {
    assert_eq!(PageRequest::new(1, 20).offset(), 0);
    assert_eq!(PageRequest::new(2, 20).offset(), 20);
    assert_eq!(PageRequest::new(0, 20).offset(), 0);
}

#[test]
fn test_page_request_limit() {
    assert_eq!(PageRequest::new(1, 50).limit(), 50);
}

#[rstest]
#[case(PageRequest::new(0, 0), PageRequest::new(1, 5))]
#[case(PageRequest::new(3, 0), PageRequest::new(3, 5))]
#[case(PageRequest::new(2, 500), PageRequest::new(2, 100))]
#[case(PageRequest::new(4, 25), PageRequest::new(4, 25))]
fn test_page_request_normalized(#[case] input: PageRequest, #[case] expected: PageRequest) {
    assert_eq!(input.normalized(5, 100), expected);
}

#[test]
fn test_page_request_deserializes_camel_case_page_size() {
    let request: PageRequest = serde_json::from_str(r#"{"page":3,"pageSize":15}"#).unwrap();
    assert_eq!(request, PageRequest::new(3, 15));

    let request: PageRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, PageRequest::default());
}

#[rstest]
#[case(3, 10, 1)]
#[case(25, 10, 3)]
#[case(50, 10, 5)]
#[case(51, 10, 6)]
#[case(0, 10, 0)]
#[case(10, 0, 0)]
fn test_paged_list_page_count(#[case] total: u64, #[case] page_size: u32, #[case] expected: u64) {
    let list: PagedList<i32> = PagedList::new(vec![], 1, page_size, total);
    assert_eq!(list.page_count(), expected);
}
