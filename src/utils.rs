pub fn log_error_ccstr<E: core::fmt::Display>(error: E) -> CCStr {
    let e = error.to_string();
    log::error!("{e}");
    CCStr::from(e)
}

pub async fn async_sleep(timeout_ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(timeout_ms)).await
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

/// A [CheapClone] compared by identity instead of by value.
///
/// Two `EqCheapClone` are equal only if they point to the same allocation,
/// which is what Dioxus props need when the inner value cannot be compared
/// (closures for instance).
#[derive(Debug)]
pub struct EqCheapClone<T: ?Sized>(CheapClone<T>);
impl<T: ?Sized> Clone for EqCheapClone<T> {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}
impl<T: ?Sized> PartialEq for EqCheapClone<T> {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.0, &other.0)
    }
}
impl<T: ?Sized> From<CheapClone<T>> for EqCheapClone<T> {
    fn from(value: CheapClone<T>) -> Self {
        EqCheapClone(value)
    }
}
impl<T: ?Sized> From<EqCheapClone<T>> for CheapClone<T> {
    fn from(value: EqCheapClone<T>) -> Self {
        value.0
    }
}
impl<T: ?Sized> core::ops::Deref for EqCheapClone<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl From<String> for CCStr {
    fn from(value: String) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
