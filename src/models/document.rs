use serde::Serialize;

use super::{Import, LocalDefinition, Metadata, Operation, Tool, Trigger, TOOL_TYPE};

/// A parsed BUSY document of any type other than `[Tool]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusyDocument {
    metadata: Metadata,
    imports: Vec<Import>,
    definitions: Vec<LocalDefinition>,
    setup: Option<String>,
    operations: Vec<Operation>,
    triggers: Vec<Trigger>,
}

impl BusyDocument {
    pub fn new(
        metadata: Metadata,
        imports: Vec<Import>,
        definitions: Vec<LocalDefinition>,
        setup: Option<String>,
        operations: Vec<Operation>,
        triggers: Vec<Trigger>,
    ) -> Self {
        Self {
            metadata,
            imports,
            definitions,
            setup,
            operations,
            triggers,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn definitions(&self) -> &[LocalDefinition] {
        &self.definitions
    }

    pub fn setup(&self) -> Option<&str> {
        self.setup.as_deref()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }
}

/// A `[Tool]` document. Triggers are documentation only, so the list is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDocument {
    #[serde(flatten)]
    document: BusyDocument,
    tools: Vec<Tool>,
}

impl ToolDocument {
    pub fn new(
        metadata: Metadata,
        imports: Vec<Import>,
        definitions: Vec<LocalDefinition>,
        setup: Option<String>,
        operations: Vec<Operation>,
        tools: Vec<Tool>,
    ) -> Self {
        Self {
            document: BusyDocument::new(
                metadata,
                imports,
                definitions,
                setup,
                operations,
                Vec::new(),
            ),
            tools,
        }
    }

    pub fn document(&self) -> &BusyDocument {
        &self.document
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

/// Either document variant, chosen by the metadata type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Document {
    Busy(BusyDocument),
    Tool(ToolDocument),
}

impl Document {
    fn base(&self) -> &BusyDocument {
        match self {
            Document::Busy(doc) => doc,
            Document::Tool(doc) => &doc.document,
        }
    }

    pub fn is_tool(&self) -> bool {
        matches!(self, Document::Tool(_))
    }

    pub fn metadata(&self) -> &Metadata {
        self.base().metadata()
    }

    pub fn name(&self) -> &str {
        self.metadata().name()
    }

    pub fn imports(&self) -> &[Import] {
        self.base().imports()
    }

    pub fn definitions(&self) -> &[LocalDefinition] {
        self.base().definitions()
    }

    pub fn setup(&self) -> Option<&str> {
        self.base().setup()
    }

    pub fn operations(&self) -> &[Operation] {
        self.base().operations()
    }

    pub fn triggers(&self) -> &[Trigger] {
        self.base().triggers()
    }

    /// Tools of a `[Tool]` document; empty for every other type.
    pub fn tools(&self) -> &[Tool] {
        match self {
            Document::Busy(_) => &[],
            Document::Tool(doc) => doc.tools(),
        }
    }

    /// Whether `anchor` names an operation or local definition of this document.
    ///
    /// Names are compared lower-cased with spaces replaced by hyphens.
    pub fn has_anchor(&self, anchor: &str) -> bool {
        let wanted = anchor.to_lowercase();
        let slug = |name: &str| name.to_lowercase().replace(' ', "-");

        self.operations().iter().any(|op| slug(op.name()) == wanted)
            || self.definitions().iter().any(|def| slug(def.name()) == wanted)
    }
}

impl From<BusyDocument> for Document {
    fn from(doc: BusyDocument) -> Self {
        Document::Busy(doc)
    }
}

impl From<ToolDocument> for Document {
    fn from(doc: ToolDocument) -> Self {
        Document::Tool(doc)
    }
}

/// Whether a metadata type tag selects the tool variant.
pub fn is_tool_type(doc_type: &str) -> bool {
    doc_type == TOOL_TYPE
}
