//! Per-pass decode state: options, current path, nesting depth.

use crate::error::{DecodeError, DecodeErrorKind, Result};
use crate::options::DecodeOptions;
use crate::path::FieldPath;
use smallvec::SmallVec;

/// Path root until the document's `resourceType` has been read.
const UNNAMED_ROOT: &str = "%resource";

/// Reported as the type of failures that happen before any shape is entered.
const BASE_TYPE: &str = "Resource";

#[derive(Debug, Clone)]
pub struct DecodeContext {
    options: DecodeOptions,
    path: FieldPath,
    types: SmallVec<[&'static str; 16]>,
    depth: usize,
}

impl DecodeContext {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            path: FieldPath::new(UNNAMED_ROOT),
            types: SmallVec::new(),
            depth: 0,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The shape currently being decoded.
    pub fn current_type(&self) -> &'static str {
        self.types.last().copied().unwrap_or(BASE_TYPE)
    }

    /// Name the document root once its type is known.
    pub fn set_root(&mut self, root: &'static str) {
        if self.path.is_root() {
            self.path.set_root(root);
        }
    }

    /// Build an error located at the current path.
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.path.clone(), self.current_type())
    }

    /// Build an error located at field `name` below the current path.
    pub fn field_error(&mut self, name: &str, kind: DecodeErrorKind) -> DecodeError {
        self.path.push_field(name);
        let err = self.error(kind);
        self.path.pop();
        err
    }

    /// Run `f` one nesting level deeper, failing once the configured limit
    /// is reached.
    pub fn descend<T>(
        &mut self,
        type_name: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let limit = self.options.max_depth;
        if self.depth >= limit {
            return Err(self.error(DecodeErrorKind::DepthExceeded(limit)));
        }
        self.depth += 1;
        self.types.push(type_name);
        let result = f(self);
        self.types.pop();
        self.depth -= 1;
        result
    }

    pub fn in_field<T>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push_field(name);
        let result = f(self);
        self.path.pop();
        result
    }

    pub fn in_index<T>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push_index(index);
        let result = f(self);
        self.path.pop();
        result
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new(DecodeOptions::default())
    }
}
