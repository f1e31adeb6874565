use crate::base;

/// File name of the sales sheet in test directories.
pub const SHEET: &str = "sales.csv";

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual contents of a working directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    sheet: Option<String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the directory's sales sheet contents.
    pub fn with_sheet(mut self, s: &str) -> Self {
        self.sheet = Some(s.to_string());
        self
    }

    /// Reads state from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = if fs.path::<base::Config>().exists() {
            Some(fs.read::<base::Config>().unwrap())
        } else {
            None
        };
        let sheet = fs.read_to_string(SHEET).ok();
        Self { config, sheet }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    sheet: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the directory's sales sheet contents. The sheet is written
    /// verbatim and may be malformed.
    pub fn with_sheet(mut self, s: &'a str) -> Self {
        self.sheet = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        if let Some(s) = self.sheet {
            std::fs::write(fs.resolve(SHEET), s).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.sheet {
            os = os.with_sheet(s);
        }
        os
    }
}
