//! The (value, error) pair returned by every data request

use folio_core::prelude::*;

/// Outcome of a store request.
///
/// Exactly one of [`data`](Fetched::data) and [`error`](Fetched::error) is
/// present. Callers render a fallback when the data is missing; the error has
/// already been logged by the time a `Fetched` is built from a failure.
#[derive(Debug)]
pub struct Fetched<T> {
    inner: Result<T>,
}

impl<T> Fetched<T> {
    pub fn ok(data: T) -> Self {
        Self { inner: Ok(data) }
    }

    pub(crate) fn already_logged(error: Error) -> Self {
        Self { inner: Err(error) }
    }

    /// Wrap `result`, logging a failure under `context`
    pub fn from_result(context: &str, result: Result<T>) -> Self {
        Self {
            inner: result.context(context),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.inner.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    pub fn into_parts(self) -> (Option<T>, Option<Error>) {
        match self.inner {
            Ok(data) => (Some(data), None),
            Err(e) => (None, Some(e)),
        }
    }

    pub fn into_result(self) -> Result<T> {
        self.inner
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            inner: self.inner.map(f),
        }
    }

    /// The data, or `T::default()` as the empty-state fallback
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_data_and_no_error() {
        let fetched = Fetched::ok(vec![1, 2]);
        assert!(fetched.is_ok());
        assert_eq!(fetched.data(), Some(&vec![1, 2]));
        assert!(fetched.error().is_none());
    }

    #[test]
    fn test_failure_parts() {
        let fetched: Fetched<Vec<u8>> = Fetched::from_result("loading", Err(Error::http("refused")));
        let (data, error) = fetched.into_parts();
        assert!(data.is_none());
        assert!(matches!(error, Some(Error::Http { .. })));
    }

    #[test]
    fn test_failure_falls_back_to_default() {
        let fetched: Fetched<Vec<u8>> = Fetched::from_result("loading", Err(Error::http("x")));
        assert!(fetched.data_or_default().is_empty());
    }

    #[test]
    fn test_map_keeps_error() {
        let fetched: Fetched<u8> = Fetched::from_result("loading", Err(Error::config("x")));
        let mapped = fetched.map(|n| n * 2);
        assert!(matches!(mapped.into_result(), Err(Error::Config { .. })));
    }
}
