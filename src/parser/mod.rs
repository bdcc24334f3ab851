//! Parser for the Monkey language producing an Abstract Syntax Tree (AST).
//!
//! This crate exposes:
//! - The `ast` module with core AST node types and traits.
//! - The `Parser` struct that turns tokens from the `lexer` crate into an AST.
//!
//! Parsing approach:
//! - Maintains a two-token lookahead (`curr_token`, `peek_token`).
//! - Provides helpers like `expect_peek`, `is_curr_token`, and `is_peek_token`.
//! - Reports user-friendly errors via the `errors` vector.
//!
//! A trailing `;` after a `let`, `return`, or expression statement is optional: if the
//! peek token is a semicolon it is consumed, otherwise parsing just continues from the
//! current token. This mirrors a REPL-friendly grammar where a line like `5 + 5` is a
//! complete statement on its own.

pub mod error;
mod precedence;
pub mod test_helper;

use crate::ast::{
    Program,
    expression::{
        BlockStatement, BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier,
        IfExpression, InfixExpression, IntegerLiteral, PrefixExpression,
    },
    statement::{ExpressionStatement, LetStatement, ReturnStatement, Statement},
};
use crate::lexer::{
    Lexer,
    token::{Token, TokenType},
};
use crate::parser::error::{ParserError, ParserErrorType};
use precedence::Precedence;
use std::collections::HashMap;

/// A parser that converts tokens from a lexer into an Abstract Syntax Tree (AST).
///
/// The parser maintains a two-token lookahead buffer (current and peek tokens)
/// to make parsing decisions. It processes tokens sequentially and builds
/// the AST by parsing different statement types.
#[derive(Debug, Clone, PartialEq)]
pub struct Parser {
    l: Lexer,
    curr_token: Token,
    peek_token: Token,
    pub errors: Vec<ParserError>,
    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

impl Parser {
    /// Creates a new parser instance with the given lexer.
    ///
    /// Initializes the parser with empty tokens and then reads the first two tokens
    /// to set up the lookahead buffer. This ensures the parser always has
    /// both current and peek tokens available for parsing decisions.
    pub fn new(l: Lexer) -> Self {
        let mut p = Parser {
            l,
            curr_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            peek_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            errors: Vec::<ParserError>::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };
        // Register prefix parse functions
        p.register_prefix_parse_fn(TokenType::IDENT, Parser::parse_identifier);
        p.register_prefix_parse_fn(TokenType::INT, Parser::parse_integer_literal);
        p.register_prefix_parse_fn(TokenType::BANG, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::MINUS, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::TRUE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::FALSE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::LPAREN, Parser::parse_grouped_expression);
        p.register_prefix_parse_fn(TokenType::IF, Parser::parse_if_expression);
        p.register_prefix_parse_fn(TokenType::LBRACE, Parser::parse_block_statement);
        p.register_prefix_parse_fn(TokenType::FUNCTION, Parser::parse_function_literal);
        // Register Infix parse functions
        p.register_infix_parse_fn(TokenType::PLUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::MINUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::SLASH, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::ASTERISK, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::EQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::NOTEQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::GT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LPAREN, Parser::parse_call_expression);
        // Advance the token buffer to have a two-token lookahead
        p.next_token();
        p.next_token();
        p
    }
    /// Advances the token buffer by one position.
    ///
    /// Moves the peek token to the current token position and reads
    /// the next token from the lexer into the peek position. This maintains
    /// the two-token lookahead buffer/window used for parsing decisions.
    fn next_token(&mut self) {
        self.curr_token = self.peek_token.clone();
        self.peek_token = self.l.next_token();
    }

    /// Checks if the current token matches the expected token type.
    fn is_curr_token(&self, token_type: TokenType) -> bool {
        self.curr_token.token_type == token_type
    }

    /// Checks if the peek token matches the expected token type.
    fn is_peek_token(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    /// If the peek token is a semicolon, consume it. A trailing semicolon is always
    /// optional, so this never records an error.
    fn skip_optional_semicolon(&mut self) {
        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }
    }

    /// Expects the peek token to be of a specific type and advances if it matches.
    ///
    /// If the peek token matches the expected type, advances the token buffer
    /// and returns true. If it doesn't match, adds an error to the parser's
    /// error list and returns false. This is used for enforcing syntax rules.
    fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.is_peek_token(token_type) {
            self.next_token();
            true
        } else {
            self.display_peek_error(token_type);
            false
        }
    }

    /// Records an error for a peek token that didn't match what was expected.
    fn display_peek_error(&mut self, expected: TokenType) {
        let error = ParserError::expected_token(expected, &self.peek_token);
        log::warn!("{}", error);
        self.errors.push(error);
    }

    fn no_prefix_parse_function_error(&mut self) {
        let error = ParserError::no_prefix_fn(&self.curr_token);
        log::warn!("{}", error);
        self.errors.push(error);
    }

    fn register_prefix_parse_fn(&mut self, token_type: TokenType, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, parse_fn);
    }

    fn register_infix_parse_fn(&mut self, token_type: TokenType, parse_fn: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, parse_fn);
    }

    /// Returns a reference to the parser's error list.
    pub fn errors(&self) -> &Vec<ParserError> {
        &self.errors
    }

    /// Parses the entire program and returns the root AST node.
    ///
    /// Iterates through all tokens until EOF is reached, parsing each
    /// statement encountered. Collects all successfully parsed statements
    /// into a Program node. If parsing of a statement fails, it continues
    /// with the next statement rather than stopping the entire parse.
    pub fn parse_program(&mut self) -> Program {
        log::debug!("starting to parse program");
        let mut program = Program {
            statements: Vec::new(),
        };
        while self.curr_token.token_type != TokenType::EOF {
            log::trace!(
                "[{}:{}] parsing statement, curr_token={:?}, peek_token={:?}",
                self.curr_token.line,
                self.curr_token.column,
                self.curr_token.token_type,
                self.peek_token.token_type
            );
            let statement = self.parse_statement();
            if let Some(stmt) = statement {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        log::debug!(
            "finished parsing program, {} statements parsed",
            program.statements.len()
        );
        program
    }

    /// Parses a single statement based on the current token type.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.token_type {
            TokenType::LET => self.parse_let_statement().map(Statement::Let),
            TokenType::RETURN => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// Parses a let statement with the format: `let <identifier> = <expression>;`
    ///
    /// The trailing semicolon is optional.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::IDENT) {
            return None;
        }
        let name = Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        };

        if !self.expect_peek(TokenType::ASSIGN) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32);

        self.skip_optional_semicolon();

        Some(LetStatement { token, name, value })
    }

    /// Parses a return statement with the format: `return <expression>;`
    ///
    /// The trailing semicolon is optional.
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.curr_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32);

        self.skip_optional_semicolon();

        Some(ReturnStatement { token, value })
    }

    /// Parses an identifier expression.
    fn parse_identifier(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.curr_token.literal.clone();
        Some(Expression::Identifier(Identifier { token, value }))
    }

    /// Parses an expression statement: an expression used standalone, with an optional
    /// trailing semicolon.
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.curr_token.clone();
        let expr = self.parse_expression(Precedence::LOWEST as i32)?;
        let stmt = ExpressionStatement { token, value: expr };

        self.skip_optional_semicolon();
        Some(stmt)
    }

    /// Parses an expression starting from the current token position.
    ///
    /// This is the main entry point for expression parsing. It uses the Pratt parsing
    /// algorithm approach, where expressions are parsed based on precedence levels.
    /// The function looks up a prefix parse function for the current token type and
    /// delegates to that function to parse the expression.
    fn parse_expression(&mut self, precedence: i32) -> Option<Expression> {
        log::trace!(
            "[{}:{}] parse_expression called with precedence={}, curr_token={:?}",
            self.curr_token.line,
            self.curr_token.column,
            precedence,
            self.curr_token.token_type
        );
        let token_type = self.curr_token.token_type;
        let prefix = self.prefix_parse_fns.get(&token_type);
        let mut left = if let Some(prefix_parse_fn) = prefix {
            prefix_parse_fn(self)?
        } else {
            self.no_prefix_parse_function_error();
            return None;
        };

        while !self.is_peek_token(TokenType::SEMICOLON) && precedence < self.peek_precedence() {
            let peek_token_type = self.peek_token.token_type;
            let infix = self.infix_parse_fns.get(&peek_token_type).copied();
            let Some(infix_parse_fn) = infix else {
                return Some(left);
            };
            self.next_token();
            left = infix_parse_fn(self, left)?;
        }

        Some(left)
    }

    /// Parses an integer literal expression from the current token.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let error = ParserError::invalid_integer(&token);
                log::warn!("{}", error);
                self.errors.push(error);
                None
            }
        }
    }

    /// Parses a boolean literal expression from the current token.
    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.is_curr_token(TokenType::TRUE);
        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    /// Parses a prefix expression (e.g., `!true`, `-5`).
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        self.next_token();

        let right = match self.parse_expression(Precedence::PREFIX as i32) {
            Some(expr) => expr,
            None => {
                let error = ParserError::prefix_rhs_failed(&operator, &self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };

        Some(Expression::PrefixExpression(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Returns the precedence level for the next token, or the lowest precedence.
    fn peek_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.peek_token.token_type)
    }

    /// Returns the precedence level for the current token, or the lowest precedence.
    fn curr_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.curr_token.token_type)
    }

    /// Parses an infix expression (e.g., `5 + 5`, `x == y`).
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        let precedence = self.curr_precedence();
        self.next_token();

        let right = match self.parse_expression(precedence) {
            Some(expr) => expr,
            None => {
                let error = ParserError::infix_rhs_failed(&operator, &self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        Some(Expression::InfixExpression(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses a grouped expression (e.g., `(5 + 5)`).
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                let error =
                    ParserError::at_token(ParserErrorType::FailedToParseGroupedExpression, &self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(expr)
    }

    /// Parses an if expression (e.g., `if (<condition>) <consequence> else <alternative>`).
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        self.next_token();
        let condition = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                let error = ParserError::at_token(ParserErrorType::FailedToParseIfCondition, &self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let consequence = match self.parse_block_statement() {
            Some(Expression::BlockStatement(bs)) => bs,
            Some(_) => {
                let error = ParserError::at_token(
                    ParserErrorType::ExpectedBlockStatement {
                        context: "if consequence",
                    },
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
            None => {
                let error = ParserError::at_token(
                    ParserErrorType::FailedToParseIfBlock {
                        context: "consequence",
                    },
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        let alternative = if self.is_peek_token(TokenType::ELSE) {
            self.next_token();

            if !self.expect_peek(TokenType::LBRACE) {
                return None;
            }
            match self.parse_block_statement() {
                Some(Expression::BlockStatement(bs)) => Some(Box::new(bs)),
                Some(_) => {
                    let error = ParserError::at_token(
                        ParserErrorType::ExpectedBlockStatement {
                            context: "if alternative",
                        },
                        &self.curr_token,
                    );
                    log::error!("{}", error);
                    self.errors.push(error);
                    return None;
                }
                None => {
                    let error = ParserError::at_token(
                        ParserErrorType::FailedToParseIfBlock {
                            context: "alternative",
                        },
                        &self.curr_token,
                    );
                    log::error!("{}", error);
                    self.errors.push(error);
                    return None;
                }
            }
        } else {
            None
        };
        Some(Expression::IfExpression(IfExpression {
            token,
            condition: Box::new(condition),
            consequence: Box::new(Expression::BlockStatement(consequence)),
            alternative: alternative.map(|bs| Box::new(Expression::BlockStatement(*bs))),
        }))
    }

    /// Parses a block statement (e.g., `{ <statements> }`).
    ///
    /// A block only ever appears nested inside an if expression or a function
    /// literal's body, so it is parsed and carried around as an
    /// `Expression::BlockStatement` rather than as a fourth `Statement` variant.
    fn parse_block_statement(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let mut statements = Vec::new();
        while !self.is_peek_token(TokenType::RBRACE) && !self.is_peek_token(TokenType::EOF) {
            self.next_token();
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    let error = ParserError::at_token(
                        ParserErrorType::FailedToParseStatementInBlock,
                        &self.curr_token,
                    );
                    log::error!("{}", error);
                    self.errors.push(error);
                    // Continue parsing to collect more errors
                }
            }
        }
        if !self.expect_peek(TokenType::RBRACE) {
            return None;
        }
        Some(Expression::BlockStatement(BlockStatement {
            token,
            statements,
        }))
    }

    /// Parses a function literal expression (e.g., `fn(<parameters>) <body>`).
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        let parameters = match self.parse_function_parameters() {
            Some(p) => p,
            None => {
                let error = ParserError::at_token(
                    ParserErrorType::FailedToParseFunctionParameters,
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let body = match self.parse_block_statement() {
            Some(Expression::BlockStatement(block_stmt)) => block_stmt,
            Some(_) => {
                let error = ParserError::at_token(
                    ParserErrorType::ExpectedBlockStatement {
                        context: "function body",
                    },
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
            None => {
                let error =
                    ParserError::at_token(ParserErrorType::FailedToParseFunctionBody, &self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body: Box::new(body),
        }))
    }

    /// Parses the function parameters (e.g., `x, y`).
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.is_peek_token(TokenType::RPAREN) {
            self.next_token();
            return Some(parameters);
        }
        self.next_token();

        let first_param = match self.parse_identifier() {
            Some(Expression::Identifier(ident)) => ident,
            Some(_) | None => {
                let error = ParserError::expected_param_ident(&self.curr_token);
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        parameters.push(first_param);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();

            let identifier = match self.parse_identifier() {
                Some(Expression::Identifier(ident)) => ident,
                Some(_) | None => {
                    let error = ParserError::expected_param_ident(&self.curr_token);
                    log::error!("{}", error);
                    self.errors.push(error);
                    return None;
                }
            };
            parameters.push(identifier);
        }

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let arguments = match self.parse_call_arguments() {
            Some(args) => args,
            None => {
                let error = ParserError::at_token(
                    ParserErrorType::FailedToParseCallArguments,
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        Some(Expression::CallExpression(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.is_peek_token(TokenType::RPAREN) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        let first_arg = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(arg) => arg,
            None => {
                let error = ParserError::at_token(
                    ParserErrorType::FailedToParseCallArgument { context: "first" },
                    &self.curr_token,
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        arguments.push(first_arg);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            let arg = match self.parse_expression(Precedence::LOWEST as i32) {
                Some(arg) => arg,
                None => {
                    let error = ParserError::at_token(
                        ParserErrorType::FailedToParseCallArgument {
                            context: "subsequent",
                        },
                        &self.curr_token,
                    );
                    log::error!("{}", error);
                    self.errors.push(error);
                    return None;
                }
            };
            arguments.push(arg);
        }

        if !self.expect_peek(TokenType::RPAREN) {
            let error = ParserError::unclosed_call(&self.peek_token);
            log::error!("{}", error);
            self.errors.push(error);
            return None;
        }

        Some(arguments)
    }
}
