//! The compiled engine artifact.

use crate::signature::Signature;
use crate::{EngineError, Result};

/// An opaque, already-compiled computation graph ready for repeated
/// invocation.
///
/// The artifact bundles the compiled device code, the calling-convention
/// metadata the engine runtime needs to load it, and the call signature.
/// It is produced by an external compiler and is immutable once
/// constructed.
///
/// # Ownership
///
/// `EngineState` is always shared: the compiler output keeps an owning
/// reference and every execution context built from it holds another, via
/// `Arc<EngineState>`. No context ever takes exclusive ownership, so a
/// context being dropped never destroys an artifact that other contexts
/// (or the compiler output itself) still reference.
#[derive(Debug)]
pub struct EngineState {
    /// Engine name, typically the attribute name the host framework
    /// registered the engine under.
    name: String,

    /// Compiled device code emitted by the external compiler.
    code: Vec<u8>,

    /// Opaque calling-convention metadata consumed by the engine runtime
    /// when the artifact is loaded.
    metadata: Vec<u8>,

    /// Declared input and output slots.
    signature: Signature,

    /// Textual dump of the source computation graph, kept for diagnostics.
    source_graph: Option<String>,
}

impl EngineState {
    /// Construct a validated engine artifact.
    ///
    /// Validation is eager: an artifact with no compiled code or no
    /// declared outputs is a compiler contract violation, and construction
    /// fails without producing a usable artifact.
    ///
    /// # Errors
    /// Returns an error if the code blob is empty or the signature declares
    /// no outputs.
    pub fn new(
        name: impl Into<String>,
        code: Vec<u8>,
        metadata: Vec<u8>,
        signature: Signature,
    ) -> Result<Self> {
        let name = name.into();

        if code.is_empty() {
            return Err(EngineError::EmptyArtifact(name));
        }
        if signature.output_arity() == 0 {
            return Err(EngineError::InvalidSignature(format!(
                "engine '{}' declares no outputs",
                name
            )));
        }

        Ok(Self {
            name,
            code,
            metadata,
            signature,
            source_graph: None,
        })
    }

    /// Attach a textual dump of the source graph for diagnostics.
    pub fn with_source_graph(mut self, graph: impl Into<String>) -> Self {
        self.source_graph = Some(graph.into());
        self
    }

    /// Engine name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled device code.
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Calling-convention metadata.
    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }

    /// Declared call signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Source graph dump, if the compiler attached one.
    pub fn source_graph(&self) -> Option<&str> {
        self.source_graph.as_deref()
    }
}
