use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects deserialized from a data directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    names: Option<base::NameTable>,
    metrics: std::collections::BTreeMap<base::Metric, base::MetricNodeSet>,
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

    /// Sets the directory's [`base::NameTable`].
    pub fn with_names<T>(mut self, names: T) -> Self
    where
        T: TryInto<base::NameTable> + std::fmt::Debug,
        <T as TryInto<base::NameTable>>::Error: std::fmt::Debug,
    {
        self.names = Some(names.try_into().unwrap());
        self
    }

    /// Sets the records of one metric.
    pub fn with_metric<T>(mut self, metric: base::Metric, set: T) -> Self
    where
        T: TryInto<base::MetricNodeSet> + std::fmt::Debug,
        <T as TryInto<base::MetricNodeSet>>::Error: std::fmt::Debug,
    {
        self.metrics.insert(metric, set.try_into().unwrap());
        self
    }

    /// Fills in an empty name table and empty metric sets wherever unset, as
    /// `init` leaves a directory.
    pub fn seeded(mut self) -> Self {
        self.names.get_or_insert_with(base::NameTable::default);
        for metric in <base::Metric as strum::IntoEnumIterator>::iter() {
            self.metrics.entry(metric).or_default();
        }
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        let metrics = <base::Metric as strum::IntoEnumIterator>::iter()
            .filter(|m| fs.metric_path(*m).exists())
            .map(|m| (m, fs.read_metric(m).unwrap()))
            .collect();
        Self {
            config: read!(base::Config),
            names: read!(base::NameTable),
            metrics,
        }
    }
}

/// Representation of a data directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    names: Option<&'a str>,
    metrics: Vec<(base::Metric, &'a str)>,
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

    /// Sets the directory's [`base::NameTable`] file contents.
    pub fn with_names(mut self, s: &'a str) -> Self {
        self.names = Some(s);
        self
    }

    /// Sets one metric's file contents.
    pub fn with_metric(mut self, metric: base::Metric, s: &'a str) -> Self {
        self.metrics.push((metric, s));
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(path: std::path::PathBuf, field: Option<&str>)
        where
            T: std::fmt::Debug + std::str::FromStr,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(path, s).unwrap()
            }
        }

        write::<base::Config>(fs.path::<base::Config>(), self.config);
        write::<base::NameTable>(fs.path::<base::NameTable>(), self.names);
        for &(metric, s) in &self.metrics {
            write::<base::MetricNodeSet>(fs.metric_path(metric), Some(s));
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.names {
            os = os.with_names(s);
        }
        for &(metric, s) in &self.metrics {
            os = os.with_metric(metric, s);
        }
        os
    }
}

/// A small data directory with two functional chapters carrying records, one
/// dated chapter, and names for most codes.
pub fn sample_state() -> StrState<'static> {
    StrState::new()
        .with_config("{}")
        .with_names(
            r#"{
                "functional": {"20": "Health", "20.01": "Hospitals", "20.02": "Clinics", "21": "Education"},
                "economic": {"51.01": "Transfers", "10.01": "Salaries"}
            }"#,
        )
        .with_metric(
            base::Metric::Budget,
            r#"
                {"functional_code":"20.01.03","economic_code":"51.01","amount":1000}
                {"functional_code":"20.02.01","economic_code":"10.01","amount":400}
                {"functional_code":"21.05","economic_code":"10.01","amount":250}
                {"functional_code":"22.01","economic_code":"20.01","amount":70,"year":2023}
            "#,
        )
        .with_metric(
            base::Metric::Committed,
            r#"
                {"functional_code":"20.01.03","economic_code":"51.01","amount":800}
                {"functional_code":"21.05","economic_code":"10.01","amount":100}
            "#,
        )
        .with_metric(
            base::Metric::PaidTreasury,
            r#"
                {"functional_code":"20.01.03","economic_code":"51.01","amount":450}
                {"functional_code":"21.05","economic_code":"10.01","amount":100}
            "#,
        )
        .with_metric(
            base::Metric::PaidNonTreasury,
            r#"{"functional_code":"20.01.03","economic_code":"51.01","amount":50}"#,
        )
}
