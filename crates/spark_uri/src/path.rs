// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Slash handling shared by the builder and the decoder.

/// Iterates over the non-empty `/`-separated segments of `path`.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Accumulates path segments, keeping exactly one `/` between them.
#[derive(Debug, Default)]
pub(crate) struct PathJoiner {
    path: String,
}

impl PathJoiner {
    /// Appends every non-empty segment of `part`.
    pub(crate) fn push(&mut self, part: &str) -> &mut Self {
        for segment in segments(part) {
            if !self.path.is_empty() {
                self.path.push('/');
            }
            self.path.push_str(segment);
        }
        self
    }

    pub(crate) fn push_opt(&mut self, part: Option<&str>) -> &mut Self {
        if let Some(part) = part {
            self.push(part);
        }
        self
    }

    /// Prefixes the joined path with `base`, whose trailing slashes are dropped.
    ///
    /// The base is otherwise left untouched so the `//` of its scheme survives.
    pub(crate) fn finish_under(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match (base.is_empty(), self.path.is_empty()) {
            (_, true) => base.to_owned(),
            (true, false) => self.path.clone(),
            (false, false) => format!("{base}/{}", self.path),
        }
    }
}
