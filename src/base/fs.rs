use crate::base;

/// Data directory holding the config, the name table, and one JSON lines file
/// per metric.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".budgetdrill.json";
}
impl Io for base::NameTable {
    const FILENAME: &'static str = "names.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    pub fn metric_path(&self, metric: base::Metric) -> std::path::PathBuf {
        self.dir.join(metric.filename())
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns
    /// `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        Self::read_path(&self.path::<T>())
    }

    /// Deserializes a metric's records. A missing file reads as an empty set.
    pub fn read_metric(&self, metric: base::Metric) -> Result<base::MetricNodeSet, ReadError> {
        Self::read_path(&self.metric_path(metric))
    }

    fn read_path<T>(path: &std::path::Path) -> Result<T, ReadError>
    where
        T: Default + std::str::FromStr,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(path) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }

    /// Creates an empty name table and empty metric files wherever they are
    /// missing. Existing files are left alone. Returns the created paths.
    pub fn seed(&self) -> std::io::Result<Vec<std::path::PathBuf>> {
        let mut created = Vec::new();
        let names = self.path::<base::NameTable>();
        if !names.exists() {
            self.write(&base::NameTable::default())?;
            created.push(names);
        }
        for metric in <base::Metric as strum::IntoEnumIterator>::iter() {
            let path = self.metric_path(metric);
            if !path.exists() {
                std::fs::write(&path, "")?;
                created.push(path);
            }
        }
        Ok(created)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}
