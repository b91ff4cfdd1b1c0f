//! Definition loading and import resolution.
//!
//! # Architecture
//!
//! ```text
//! Compiler::load(path)
//!   └── by extension ──► DefinitionCompiler<Bitfield> | DefinitionCompiler<Enum>
//!                          ├── memo cache hit?      ──► shared Rc
//!                          ├── already in progress? ──► ImportCycle
//!                          └── read → prepare → per line:
//!                                 import  ──► load(import) (recursive)
//!                                 element ──► parse_line
//!                               → finalize
//! ```
//!
//! Loading is synchronous and single threaded. The in-progress stack and the
//! memo cache belong to the compiler instance, so two compilers never share
//! state.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use defc_ir::{BitfieldDef, Definition, EnumDef, Kind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::kind::{Bitfield, DefinitionKind, ElementError, Enum};
use crate::source::{header_for, normalize, SourceFile};
use crate::{CompileError, CompilerConfig};

/// Loads definitions of one kind, resolving their imports.
pub struct DefinitionCompiler<K: DefinitionKind> {
    kind: K,
    config: CompilerConfig,
    /// Parsed definitions by normalized logical path.
    cache: FxHashMap<PathBuf, Rc<K::Output>>,
    /// Paths currently being loaded, outermost first.
    loading_stack: Vec<PathBuf>,
    loading_set: FxHashSet<PathBuf>,
}

impl<K: DefinitionKind> DefinitionCompiler<K> {
    pub fn new(kind: K, config: CompilerConfig) -> Self {
        DefinitionCompiler {
            kind,
            config,
            cache: FxHashMap::default(),
            loading_stack: Vec::new(),
            loading_set: FxHashSet::default(),
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Load the definition at `path` (relative to the base directory)
    /// together with everything it imports.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Rc<K::Output>, CompileError> {
        let path = normalize(path.as_ref());

        if self.config.memoize_imports {
            if let Some(def) = self.cache.get(&path) {
                tracing::trace!(path = %path.display(), "definition cache hit");
                return Ok(Rc::clone(def));
            }
        }

        self.start_loading(&path)?;
        let result = self.load_uncached(&path);
        self.finish_loading();

        let def = Rc::new(result?);
        if self.config.memoize_imports {
            self.cache.insert(path, Rc::clone(&def));
        }
        Ok(def)
    }

    fn load_uncached(&mut self, path: &Path) -> Result<K::Output, CompileError> {
        tracing::debug!(kind = K::KIND.label(), path = %path.display(), "loading definition");

        let header = header_for(path, &self.config.header_extension)?;
        let mut source = SourceFile::read(&self.config.base_dir, path)?;
        self.kind.prepare(&mut source);

        let mut elements = Vec::new();
        let mut imports = Vec::new();
        for line in source.content_lines() {
            if let Some(target) = self.kind.import_target(&line.text) {
                imports.push(self.load(target)?);
                continue;
            }

            tracing::trace!(line = line.number, text = %line.text, "element line");
            let element = self
                .kind
                .parse_line(&line.text)
                .map_err(|err| positioned(err, path, line.number))?;
            elements.push(element);
        }

        self.kind
            .finalize(header, elements, imports)
            .map_err(|source| CompileError::UnrepresentableWidth {
                path: path.to_path_buf(),
                source,
            })
    }

    fn start_loading(&mut self, path: &Path) -> Result<(), CompileError> {
        if self.loading_set.contains(path) {
            let start = self
                .loading_stack
                .iter()
                .position(|p| p == path)
                .unwrap_or(0);
            let chain = self.loading_stack[start..]
                .iter()
                .cloned()
                .chain(std::iter::once(path.to_path_buf()))
                .collect();
            return Err(CompileError::ImportCycle { chain });
        }
        self.loading_set.insert(path.to_path_buf());
        self.loading_stack.push(path.to_path_buf());
        Ok(())
    }

    fn finish_loading(&mut self) {
        if let Some(done) = self.loading_stack.pop() {
            self.loading_set.remove(&done);
        }
    }
}

fn positioned(err: ElementError, path: &Path, line_no: usize) -> CompileError {
    match err {
        ElementError::Line(source) => CompileError::LineParse {
            path: path.to_path_buf(),
            line_no,
            source,
        },
        ElementError::Width(source) => CompileError::UnrepresentableWidth {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Loads definitions of either kind, choosing by file extension.
pub struct Compiler {
    bitfields: DefinitionCompiler<Bitfield>,
    enums: DefinitionCompiler<Enum>,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        let bitfield = Bitfield {
            zero_width: config.zero_width,
        };
        Compiler {
            bitfields: DefinitionCompiler::new(bitfield, config.clone()),
            enums: DefinitionCompiler::new(Enum, config),
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        self.bitfields.config()
    }

    /// Load a `.btx` or `.the` definition file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Definition, CompileError> {
        let path = path.as_ref();
        match Kind::from_path(path) {
            Some(Kind::Bitfield) => self.load_bitfield(path).map(Definition::Bitfield),
            Some(Kind::Enum) => self.load_enum(path).map(Definition::Enum),
            None => Err(CompileError::UnknownKind {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Load `path` as a bitfield regardless of its extension.
    pub fn load_bitfield(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Rc<BitfieldDef>, CompileError> {
        self.bitfields.load(path)
    }

    /// Load `path` as an enum regardless of its extension.
    pub fn load_enum(&mut self, path: impl AsRef<Path>) -> Result<Rc<EnumDef>, CompileError> {
        self.enums.load(path)
    }
}
