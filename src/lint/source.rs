//! Parsed source files.

use std::fmt;
use std::path::{Path, PathBuf};

use swc_common::comments::{CommentKind, Comments, SingleThreadedComments};
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, Globals, SourceFile, SourceMap, Spanned, GLOBALS};
use swc_ecma_ast::{EsVersion, Program};
use swc_ecma_parser::{lexer::Lexer, EsConfig, Parser, StringInput, Syntax};
use tracing::debug;

use super::span::Span;
use crate::error::{NotyposError, Result};

/// One source file: its syntax tree, comments and position lookup.
pub struct SourceUnit {
    pub path: PathBuf,
    pub program: Program,
    source_map: Lrc<SourceMap>,
    file: Lrc<SourceFile>,
    comments: SingleThreadedComments,
}

impl SourceUnit {
    /// Parse `text` as the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceParseError` if `text` is not valid ECMAScript + JSX.
    /// Errors the parser recovers from count as failures too.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let source_map: Lrc<SourceMap> = Default::default();
        let file = source_map.new_source_file(FileName::Real(path.clone()), text.into());
        let comments = SingleThreadedComments::default();

        let parsed = GLOBALS.set(&Globals::new(), || {
            let lexer = Lexer::new(
                syntax(),
                EsVersion::latest(),
                StringInput::from(&*file),
                Some(&comments),
            );
            let mut parser = Parser::new_from(lexer);
            let program = parser.parse_program();
            let recovered = parser.take_errors();
            program.and_then(|program| match recovered.into_iter().next() {
                Some(error) => Err(error),
                None => Ok(program),
            })
        });

        let program = parsed.map_err(|error| {
            let loc = source_map.lookup_char_pos(error.span().lo.max(file.start_pos));
            NotyposError::SourceParseError {
                path: path.clone(),
                line: loc.line,
                column: loc.col.0 + 1,
                message: error.kind().msg().to_string(),
            }
        })?;

        debug!(path = %path.display(), "Parsed source file");
        Ok(Self {
            path,
            program,
            source_map,
            file,
            comments,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        self.file.src.as_str()
    }

    /// Location of `span` in this file.
    pub fn span(&self, span: swc_common::Span) -> Span {
        Span::from_source(&self.path, &self.source_map, span)
    }

    /// Source text covered by `span`.
    pub fn snippet(&self, span: swc_common::Span) -> &str {
        let start = span.lo.0.saturating_sub(self.file.start_pos.0) as usize;
        let end = span.hi.0.saturating_sub(self.file.start_pos.0) as usize;
        self.text().get(start..end).unwrap_or_default()
    }

    /// Body of the last `/** ... */` comment directly before `pos`, without
    /// the leading `*`.
    pub fn doc_comment(&self, pos: BytePos) -> Option<String> {
        self.comments
            .get_leading(pos)?
            .into_iter()
            .rev()
            .find_map(|comment| match comment.kind {
                CommentKind::Block => comment.text.strip_prefix('*').map(str::to_string),
                CommentKind::Line => None,
            })
    }
}

impl fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn syntax() -> Syntax {
    Syntax::Es(EsConfig {
        jsx: true,
        decorators: true,
        ..Default::default()
    })
}
