use crate::error::EngineError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Descriptive statistics, only computed when `stats` mode is requested.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsBlock {
    pub avg_line_length: f64,
    pub avg_words_length: f64,
    pub empty_lines: usize,
}

impl StatsBlock {
    /// Fields in output order, all widened to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("avg_line_length", self.avg_line_length),
            ("avg_words_length", self.avg_words_length),
            ("empty_lines", self.empty_lines as f64),
        ]
    }
}

/// Metrics for one file. Only requested keys are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Scalar(usize),
    Stats(StatsBlock),
}

impl FileMetrics {
    /// Present metrics in the fixed order lines, words, chars, stats.
    pub fn entries(&self) -> Vec<(&'static str, MetricValue)> {
        let scalars = [
            ("lines", self.lines),
            ("words", self.words),
            ("chars", self.chars),
        ];
        scalars
            .into_iter()
            .filter_map(|(key, v)| v.map(|v| (key, MetricValue::Scalar(v))))
            .chain(self.stats.map(|s| ("stats", MetricValue::Stats(s))))
            .collect()
    }
}

/// Path → metrics for one invocation.
///
/// Keeps insertion order. Inserting an existing path replaces its metrics in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, FileMetrics)>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, metrics: FileMetrics) {
        let path = path.into();
        if let Some(&i) = self.index.get(&path) {
            self.entries[i].1 = metrics;
        } else {
            self.index.insert(path.clone(), self.entries.len());
            self.entries.push((path, metrics));
        }
    }

    pub fn get(&self, path: &str) -> Option<&FileMetrics> {
        self.index.get(path).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileMetrics)> {
        self.entries.iter().map(|(p, m)| (p.as_str(), m))
    }
}

impl<S: Into<String>> FromIterator<(S, FileMetrics)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (S, FileMetrics)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (path, metrics) in iter {
            set.insert(path, metrics);
        }
        set
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, metrics) in &self.entries {
            map.serialize_entry(path, metrics)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ResultSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of file path to metrics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ResultSet, A::Error> {
                let mut set = ResultSet::new();
                while let Some((path, metrics)) = access.next_entry::<String, FileMetrics>()? {
                    set.insert(path, metrics);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}

/// Outcome of a run: merged results plus the files that failed.
#[derive(Debug, Default)]
pub struct RunResult {
    pub results: ResultSet,
    pub errors: Vec<(PathBuf, EngineError)>,
}
