// webfont-kit/src/scanner/structured.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A strict, tokenizer-based reader for the top-level `@font-face` rules of a stylesheet.
//!
//! Unlike a browser, this reader gives up on the first syntax error instead of recovering from
//! it. The caller is expected to fall back to the regex scanner in that case. A block or comment
//! left open at the end of input is an error too, since it hides every rule after it.

use cssparser::{BasicParseErrorKind, Delimiter, ParseError, ParseErrorKind, Parser, ParserInput, Token};
use std::borrow::Cow;

use crate::descriptor::Descriptors;
use crate::error::CssSyntaxError;

/// Reads the descriptors of every top-level `@font-face` rule, in source order.
///
/// Rules nested inside other at-rules such as `@media` or `@supports` are not reported.
pub fn parse_font_face_rules(css: &str) -> Result<Vec<Descriptors>, CssSyntaxError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    parse_stylesheet(&mut parser, &mut rules).map_err(syntax_error)?;
    Ok(rules)
}

fn parse_stylesheet<'i, 't>(
    input: &mut Parser<'i, 't>,
    rules: &mut Vec<Descriptors>,
) -> Result<(), ParseError<'i, ()>> {
    loop {
        let start = input.position();
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::WhiteSpace(_) | Token::CDO | Token::CDC => {}
            Token::Comment(_) => {
                let comment = input.slice_from(start);
                if comment.len() < 4 || !comment.ends_with("*/") {
                    return Err(input.new_error(BasicParseErrorKind::EndOfInput));
                }
            }
            Token::AtKeyword(ref name) if name.eq_ignore_ascii_case("font-face") => {
                input.expect_curly_bracket_block()?;
                rules.push(parse_block(input, '}', parse_descriptors)?);
            }
            Token::AtKeyword(_) => skip_at_rule(input)?,
            token => skip_qualified_rule(input, token)?,
        }
    }
}

// The at-keyword has been consumed. The rule ends at a `;`, a `{}` block, or the end of input.
fn skip_at_rule<'i, 't>(input: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Semicolon => return Ok(()),
            Token::CurlyBracketBlock => return parse_block(input, '}', skip_contents),
            token => check_token(input, token)?,
        }
    }
}

// `first` is the first token of the prelude. A qualified rule must end with a `{}` block.
fn skip_qualified_rule<'i, 't>(
    input: &mut Parser<'i, 't>,
    first: Token<'i>,
) -> Result<(), ParseError<'i, ()>> {
    let mut token = first;
    loop {
        if let Token::CurlyBracketBlock = token {
            return parse_block(input, '}', skip_contents);
        }
        check_token(input, token)?;
        token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => return Err(input.new_error(BasicParseErrorKind::EndOfInput)),
        };
    }
}

// Consumes everything up to the end of the current block, descending into nested blocks.
fn skip_contents<'i, 't>(input: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::CurlyBracketBlock => parse_block(input, '}', skip_contents)?,
            token => check_token(input, token)?,
        }
    }
}

// Rejects tokens that only appear in broken CSS, and validates the contents of simple blocks
// and functions. Curly blocks are handled by the callers.
fn check_token<'i, 't>(input: &mut Parser<'i, 't>, token: Token<'i>) -> Result<(), ParseError<'i, ()>> {
    match token {
        Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => Err(input.new_unexpected_token_error(token)),
        Token::Function(_) | Token::ParenthesisBlock => parse_block(input, ')', skip_contents),
        Token::SquareBracketBlock => parse_block(input, ']', skip_contents),
        _ => Ok(()),
    }
}

// Parses the block whose opening token was just returned, then checks that the block was closed
// by `closer` rather than by the end of input.
fn parse_block<'i, 't, F, T>(
    input: &mut Parser<'i, 't>,
    closer: char,
    parse: F,
) -> Result<T, ParseError<'i, ()>>
where
    F: for<'tt> FnOnce(&mut Parser<'i, 'tt>) -> Result<T, ParseError<'i, ()>>,
{
    let (value, end) = input.parse_nested_block(|input| -> Result<_, ParseError<'i, ()>> {
        let value = parse(input)?;
        Ok((value, input.position()))
    })?;
    if !input.slice_from(end).ends_with(closer) {
        return Err(input.new_error(BasicParseErrorKind::EndOfInput));
    }
    Ok(value)
}

fn parse_descriptors<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Descriptors, ParseError<'i, ()>> {
    let mut descriptors = Descriptors::new();
    while !input.is_exhausted() {
        if input.try_parse(|input| input.expect_semicolon()).is_ok() {
            continue;
        }
        let name = input.expect_ident()?.clone();
        input.expect_colon()?;
        let value = input.parse_until_after(
            Delimiter::Semicolon,
            |input| -> Result<_, ParseError<'i, ()>> {
                let start = input.position();
                skip_contents(input)?;
                Ok(input.slice_from(start).trim().to_owned())
            },
        )?;
        descriptors.set(&name, strip_priority(&value));
    }
    Ok(descriptors)
}

// Drops a trailing `!important`, which is not part of the descriptor value.
fn strip_priority(value: &str) -> &str {
    match value.rfind('!') {
        Some(bang) if value[bang + 1..].trim().eq_ignore_ascii_case("important") => {
            value[..bang].trim_end()
        }
        _ => value,
    }
}

fn syntax_error(error: ParseError<'_, ()>) -> CssSyntaxError {
    let message: Cow<'static, str> = match error.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => "unexpected end of input".into(),
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(ref token)) => {
            format!("unexpected token {:?}", token).into()
        }
        ParseErrorKind::Basic(ref kind) => format!("{:?}", kind).into(),
        ParseErrorKind::Custom(()) => "invalid declaration".into(),
    };
    CssSyntaxError {
        line: error.location.line + 1,
        column: error.location.column,
        message,
    }
}
