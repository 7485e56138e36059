//! Recursive descent parser for GraphQL query documents.
//!
//! [`QueryParser`] pulls tokens from a [`QueryLexer`] with one token of
//! lookahead. Every grammar rule has a `parse_*` method returning
//! `Result<Node, ParseError>`; the first error short-circuits through `?` and
//! ends the parse. Definitions completed before the error are kept in the
//! partial document.

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::lexer::QueryLexer;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ErrorLocation;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseResult;
use crate::SourceInput;

/// Where a value is being parsed, determining whether `$variables` are
/// allowed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Field and directive arguments inside operations and fragments.
    AllowVariables,
    /// `$var: Type = <here>`
    VariableDefaultValue,
    /// `$var: Type @dir(arg: <here>)`
    VariableDirective,
}

impl ConstContext {
    /// Describes the context for error messages, or `None` if variables are
    /// allowed here.
    fn disallowed_description(&self) -> Option<&'static str> {
        match self {
            ConstContext::AllowVariables => None,
            ConstContext::VariableDefaultValue => Some("variable default values"),
            ConstContext::VariableDirective => Some("variable definition directives"),
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL query documents.
///
/// # Usage
///
/// ```
/// use tinygql_parser::QueryParser;
/// use tinygql_parser::SourceInput;
///
/// let source = SourceInput::new("query.graphql", "query Me { me { id } }");
/// let result = QueryParser::new(&source).parse_query();
///
/// let doc = result.valid_ast().unwrap();
/// assert_eq!(doc.operations[0].name.as_deref(), Some("Me"));
/// ```
pub struct QueryParser<'src> {
    lexer: QueryLexer<'src>,

    /// One token of lookahead. Never holds a `Comment` token.
    peeked: Option<Token<'src>>,

    /// Shared nesting depth counter for values, selection sets and list
    /// types. Keeps adversarial inputs like `[[[[...` from overflowing the
    /// stack.
    recursion_depth: usize,
}

impl<'src> QueryParser<'src> {
    /// Maximum nesting depth for values, selection sets and list types.
    ///
    /// Far beyond any realistic document while staying safe in debug builds.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(source: &'src SourceInput) -> Self {
        Self {
            lexer: QueryLexer::new(source),
            peeked: None,
            recursion_depth: 0,
        }
    }

    /// Parses a complete query document.
    ///
    /// Always returns a document. On failure it holds the definitions that
    /// were completed before the first error.
    pub fn parse_query(mut self) -> ParseResult<QueryDocument> {
        let source_name = self.lexer.source().name();
        let mut document = QueryDocument::default();
        match self.parse_definitions(&mut document) {
            Ok(()) => {
                log::debug!(
                    "parsed `{source_name}`: {} operation(s), {} fragment(s)",
                    document.operations.len(),
                    document.fragments.len(),
                );
                ParseResult::ok(document)
            },
            Err(error) => {
                log::debug!("failed to parse `{source_name}`: {error}");
                ParseResult::partial(document, error)
            },
        }
    }

    fn parse_definitions(&mut self, document: &mut QueryDocument) -> Result<(), ParseError> {
        loop {
            if self.peek_is(TokenKind::Eof)? {
                return Ok(());
            }

            if self.peek_is_keyword("fragment")? {
                let fragment = self.parse_fragment_definition()?;
                log::trace!("parsed fragment `{}`", fragment.name);
                document.fragments.push(fragment);
                continue;
            }

            let starts_operation = self.peek_is(TokenKind::BraceL)?
                || self.peek_is_keyword("query")?
                || self.peek_is_keyword("mutation")?
                || self.peek_is_keyword("subscription")?;
            if !starts_operation {
                let token = self.next()?;
                let found = describe_token(&token);
                let mut error = ParseError::new(
                    format!("unexpected {found}"),
                    ErrorLocation::from(&token.position),
                    ParseErrorKind::UnexpectedToken {
                        expected: DEFINITION_STARTS.iter().map(|s| s.to_string()).collect(),
                        found,
                    },
                );
                error.add_help(
                    "a query document contains operations (`query`, `mutation`, \
                    `subscription` or a bare `{ ... }`) and `fragment` definitions",
                );
                return Err(error);
            }

            let operation = self.parse_operation_definition()?;
            log::trace!(
                "parsed {} `{}`",
                operation.operation_type,
                operation.name.as_deref().unwrap_or("<anonymous>"),
            );
            document.operations.push(operation);
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    /// Returns the next significant token without consuming it.
    fn peek(&mut self) -> Result<&Token<'src>, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.read_significant_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consumes and returns the next significant token.
    fn next(&mut self) -> Result<Token<'src>, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_significant_token(),
        }
    }

    /// Reads from the lexer, skipping comments.
    fn read_significant_token(&mut self) -> Result<Token<'src>, ParseError> {
        loop {
            let token = self.lexer.read_token()?;
            if token.kind != TokenKind::Comment {
                return Ok(token);
            }
        }
    }

    fn peek_is(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek()?.kind == kind)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_keyword(keyword))
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes a token of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(&token, &[&format!("`{kind}`")]))
        }
    }

    fn expect_name(&mut self) -> Result<Token<'src>, ParseError> {
        let token = self.next()?;
        if token.kind == TokenKind::Name {
            Ok(token)
        } else {
            Err(unexpected(&token, &["name"]))
        }
    }

    /// Consumes a `Name` token spelled exactly `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'src>, ParseError> {
        let token = self.next()?;
        if token.is_keyword(keyword) {
            Ok(token)
        } else {
            Err(unexpected(&token, &[&format!("`{keyword}`")]))
        }
    }

    /// Parses `open item+ close`.
    ///
    /// `item_name` names one element in the "expected at least one ..."
    /// message; `construct` names the whole list in the error kind.
    fn parse_non_empty<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        item_name: &str,
        construct: &str,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let open_token = self.expect(open)?;
        if self.peek_is(close)? {
            let token = self.next()?;
            return Err(ParseError::new(
                format!("expected at least one {item_name}, found {}", describe_token(&token)),
                ErrorLocation::from(&token.position),
                ParseErrorKind::EmptyConstruct {
                    construct: construct.to_string(),
                },
            ));
        }

        let mut items = Vec::new();
        while !self.peek_is(close)? {
            if self.peek_is(TokenKind::Eof)? {
                return Err(self.unclosed(&open_token, close));
            }
            items.push(parse_item(self)?);
        }
        self.next()?;
        Ok(items)
    }

    /// Parses `open item* close`.
    fn parse_possibly_empty<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let open_token = self.expect(open)?;
        let mut items = Vec::new();
        while !self.peek_is(close)? {
            if self.peek_is(TokenKind::Eof)? {
                return Err(self.unclosed(&open_token, close));
            }
            items.push(parse_item(self)?);
        }
        self.next()?;
        Ok(items)
    }

    /// Builds the error for a delimiter still open at the end of input.
    fn unclosed(&mut self, open_token: &Token<'src>, close: TokenKind) -> ParseError {
        let eof_location = match self.peek() {
            Ok(token) => ErrorLocation::from(&token.position),
            Err(error) => return error,
        };
        let mut error = ParseError::new(
            format!("expected `{close}`, found <EOF>"),
            eof_location,
            ParseErrorKind::UnexpectedEof {
                expected: vec![format!("`{close}`")],
            },
        );
        error.add_note_with_location(
            format!("`{}` opened here", open_token.kind),
            ErrorLocation::from(&open_token.position),
        );
        error
    }

    // =========================================================================
    // Recursion limit
    // =========================================================================

    /// Increments the nesting depth, failing once it exceeds
    /// [`MAX_RECURSION_DEPTH`](Self::MAX_RECURSION_DEPTH). Callers pair this
    /// with `exit_recursion()`.
    fn enter_recursion(&mut self) -> Result<(), ParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let location = ErrorLocation::from(&self.peek()?.position);
            return Err(ParseError::new(
                "maximum nesting depth exceeded",
                location,
                ParseErrorKind::NestingTooDeep {
                    limit: Self::MAX_RECURSION_DEPTH,
                },
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses `query Name($v: T) @dir { ... }` or the `{ ... }` shorthand.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, ParseError> {
        if self.peek_is(TokenKind::BraceL)? {
            return Ok(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set: self.parse_selection_set()?,
            });
        }

        let keyword = self.expect_name()?;
        let Some(operation_type) = OperationType::from_keyword(&keyword.value) else {
            return Err(unexpected(&keyword, &["`query`", "`mutation`", "`subscription`"]));
        };

        let name = if self.peek_is(TokenKind::Name)? {
            Some(self.next()?.value.into_owned())
        } else {
            None
        };

        let variable_definitions = if self.peek_is(TokenKind::ParenL)? {
            self.parse_non_empty(
                TokenKind::ParenL,
                TokenKind::ParenR,
                "variable definition",
                "variable definitions",
                Self::parse_variable_definition,
            )?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Parses `$name: Type = default @directives`.
    fn parse_variable_definition(&mut self) -> Result<VariableDefinition, ParseError> {
        self.expect(TokenKind::Dollar)?;
        let variable = self.expect_name()?.value.into_owned();
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type_ref()?;

        let default_value = if self.peek_is(TokenKind::Equals)? {
            self.next()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };

        let directives = self.parse_directives(ConstContext::VariableDirective)?;

        Ok(VariableDefinition {
            variable,
            var_type,
            directives,
            default_value,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses `fragment Name on Type @directives { ... }`.
    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, ParseError> {
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?.value.into_owned();
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> Result<String, ParseError> {
        let token = self.expect_name()?;
        if token.is_keyword("on") {
            let mut error = ParseError::new(
                "fragment name cannot be `on`",
                ErrorLocation::from(&token.position),
                ParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
            return Err(error);
        }
        Ok(token.value.into_owned())
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses `{ selection+ }`.
    fn parse_selection_set(&mut self) -> Result<Vec<Selection>, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_non_empty(
            TokenKind::BraceL,
            TokenKind::BraceR,
            "definition",
            "selection set",
            Self::parse_selection,
        );
        self.exit_recursion();
        result
    }

    fn parse_selection(&mut self) -> Result<Selection, ParseError> {
        if !self.peek_is(TokenKind::Spread)? {
            return self.parse_field().map(Selection::Field);
        }

        self.next()?;
        if self.peek_is_keyword("on")?
            || self.peek_is(TokenKind::At)?
            || self.peek_is(TokenKind::BraceL)?
        {
            self.parse_inline_fragment().map(Selection::InlineFragment)
        } else {
            self.parse_fragment_spread().map(Selection::FragmentSpread)
        }
    }

    /// Parses `alias: name(args) @directives { ... }`.
    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let first = self.expect_name()?.value.into_owned();
        let (alias, name) = if self.peek_is(TokenKind::Colon)? {
            self.next()?;
            (first, self.expect_name()?.value.into_owned())
        } else {
            (first.clone(), first)
        };

        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(TokenKind::BraceL)? {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses `Name @directives` (after `...`).
    fn parse_fragment_spread(&mut self) -> Result<FragmentSpread, ParseError> {
        let name = self.parse_fragment_name()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        Ok(FragmentSpread { name, directives })
    }

    /// Parses `on Type @directives { ... }` (after `...`, type condition
    /// optional).
    fn parse_inline_fragment(&mut self) -> Result<InlineFragment, ParseError> {
        let type_condition = if self.peek_is_keyword("on")? {
            self.next()?;
            Some(self.expect_name()?.value.into_owned())
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// Parses `(name: value+)` if present.
    fn parse_arguments(&mut self, context: ConstContext) -> Result<Vec<Argument>, ParseError> {
        if !self.peek_is(TokenKind::ParenL)? {
            return Ok(Vec::new());
        }
        self.parse_non_empty(
            TokenKind::ParenL,
            TokenKind::ParenR,
            "argument",
            "argument list",
            |parser| parser.parse_argument(context),
        )
    }

    fn parse_argument(&mut self, context: ConstContext) -> Result<Argument, ParseError> {
        let name = self.expect_name()?.value.into_owned();
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(Argument { name, value })
    }

    /// Parses zero or more `@name(args)`.
    fn parse_directives(&mut self, context: ConstContext) -> Result<Vec<Directive>, ParseError> {
        let mut directives = Vec::new();
        while self.peek_is(TokenKind::At)? {
            self.next()?;
            let name = self.expect_name()?.value.into_owned();
            let arguments = self.parse_arguments(context)?;
            directives.push(Directive { name, arguments });
        }
        Ok(directives)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> Result<Value, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<Value, ParseError> {
        let token = self.next()?;
        let value = match token.kind {
            TokenKind::BracketL => {
                self.peeked = Some(token);
                let items = self.parse_possibly_empty(
                    TokenKind::BracketL,
                    TokenKind::BracketR,
                    |parser| parser.parse_value(context),
                )?;
                Value::List(items)
            },
            TokenKind::BraceL => {
                self.peeked = Some(token);
                let fields = self.parse_possibly_empty(
                    TokenKind::BraceL,
                    TokenKind::BraceR,
                    |parser| parser.parse_object_field(context),
                )?;
                Value::Object(fields)
            },
            TokenKind::Dollar => {
                if let Some(description) = context.disallowed_description() {
                    return Err(ParseError::new(
                        format!("variables are not allowed in {description}"),
                        ErrorLocation::from(&token.position),
                        ParseErrorKind::VariableNotAllowed {
                            context: description.to_string(),
                        },
                    ));
                }
                Value::Variable(self.expect_name()?.value.into_owned())
            },
            TokenKind::Int => Value::Int(token.value.into_owned()),
            TokenKind::Float => Value::Float(token.value.into_owned()),
            TokenKind::String => Value::String(token.value.into_owned()),
            TokenKind::BlockString => Value::BlockString(token.value.into_owned()),
            TokenKind::Name => match token.value.as_ref() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                _ => Value::Enum(token.value.into_owned()),
            },
            _ => return Err(unexpected(&token, &["value"])),
        };
        Ok(value)
    }

    fn parse_object_field(&mut self, context: ConstContext) -> Result<ObjectField, ParseError> {
        let name = self.expect_name()?.value.into_owned();
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ObjectField { name, value })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Name`, `[Type]`, either optionally followed by `!`.
    fn parse_type_ref(&mut self) -> Result<TypeRef, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_ref_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_ref_impl(&mut self) -> Result<TypeRef, ParseError> {
        let token = self.next()?;
        let mut type_ref = match token.kind {
            TokenKind::Name => TypeRef::Named {
                name: token.value.into_owned(),
                non_null: false,
            },
            TokenKind::BracketL => {
                let elem = self.parse_type_ref()?;
                self.expect(TokenKind::BracketR)?;
                TypeRef::List {
                    elem: Box::new(elem),
                    non_null: false,
                }
            },
            _ => return Err(unexpected(&token, &["type"])),
        };

        if self.peek_is(TokenKind::Bang)? {
            self.next()?;
            type_ref.set_non_null();
        }
        Ok(type_ref)
    }
}

/// Parses a query document from `source`.
///
/// Shorthand for `QueryParser::new(source).parse_query()`.
pub fn parse_query(source: &SourceInput) -> ParseResult<QueryDocument> {
    QueryParser::new(source).parse_query()
}

const DEFINITION_STARTS: [&str; 5] = ["`query`", "`mutation`", "`subscription`", "`fragment`", "`{`"];

/// Builds an "expected X, found Y" error at `token`.
///
/// Reaching the end of input produces [`ParseErrorKind::UnexpectedEof`].
fn unexpected(token: &Token<'_>, expected: &[&str]) -> ParseError {
    let found = describe_token(token);
    let expected_text = match expected {
        [single] => single.to_string(),
        _ => format!("one of {}", expected.join(", ")),
    };
    let message = format!("expected {expected_text}, found {found}");
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    let kind = if token.kind == TokenKind::Eof {
        ParseErrorKind::UnexpectedEof { expected }
    } else {
        ParseErrorKind::UnexpectedToken { expected, found }
    };
    ParseError::new(message, ErrorLocation::from(&token.position), kind)
}

/// Describes a token for diagnostics: `` `{` ``, `` `user` ``, `<EOF>`,
/// `string "abc"`.
fn describe_token(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::Eof => "<EOF>".to_string(),
        TokenKind::String => format!("string {:?}", token.value.as_ref()),
        TokenKind::BlockString => "block string".to_string(),
        _ => format!("`{}`", token.value),
    }
}
