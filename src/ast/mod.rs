/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed set of expression nodes and operators
/// - expressions: The payload carried by each kind of expression
/// - types: The static types every expression resolves to
pub mod ast;
pub mod expressions;
pub mod types;
