/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, comparison and string operations, manages variable
/// state, and produces output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, builtins and control flow.
/// - Reports runtime problems such as undefined variables or invalid operand
///   types as diagnostics, yielding an absent value instead of stopping.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Handles numeric and string literals, identifiers, operators, and nested
///   block comments.
/// - Reports illegal characters and rejects malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Keeps boolean-only operands of `and`/`or` apart from plain expressions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during interpretation:
/// integers, floats, strings and booleans. It also provides truthiness,
/// numeric promotion and the text form of each value.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides promotion from integer to float where arithmetic mixes them.
pub mod value;
