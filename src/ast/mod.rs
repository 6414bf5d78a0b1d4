/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression tree and helpers shared by every node
/// - expressions: Definitions for the individual node types
pub mod ast;
pub mod expressions;
