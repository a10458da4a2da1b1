use super::*;
use busline::SessionStore;

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    assert!(matches!(BrowserStorage.get("token"), Err(StorageError::Unavailable(_))));
    assert!(matches!(BrowserStorage.set("token", "abc"), Err(StorageError::Unavailable(_))));
    assert!(matches!(BrowserStorage.remove("token"), Err(StorageError::Unavailable(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn unavailable_storage_loads_no_session() {
    assert_eq!(SessionStore::new(BrowserStorage).load(), None);
}
