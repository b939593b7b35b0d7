//!Text (ASCII) STL parsing.
//!
//!The grammar is keyword driven and whitespace insensitive, so the whole
//!buffer is tokenized on whitespace and consumed token by token. Every
//!failure reports the index of the facet being parsed at the time.

use crate::error::DecodeError;
use crate::types::{Facet, Mesh, Vertex};
use itertools::Itertools;
use std::iter::Peekable;
use std::str::SplitWhitespace;

type Tokens<'a> = Peekable<SplitWhitespace<'a>>;

pub(crate) fn parse(bytes: &[u8]) -> Result<Mesh, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| DecodeError::MalformedFile { facet_index: 0 })?;
    let mut tokens: Tokens = text.split_whitespace().peekable();

    expect_keyword(&mut tokens, "solid", 0)?;
    let name = read_solid_name(&mut tokens);

    let mut facets: Vec<Facet> = Vec::new();
    loop {
        match tokens.next() {
            Some("facet") => {
                facets.push(read_facet_body(&mut tokens, facets.len())?);
            }
            Some("endsolid") => break,
            _ => {
                return Err(DecodeError::MalformedFile {
                    facet_index: facets.len(),
                })
            }
        }
    }

    Ok(Mesh { name, facets })
}

/// Everything after `facet` up to and including `endfacet`
fn read_facet_body(tokens: &mut Tokens, facet_index: usize) -> Result<Facet, DecodeError> {
    expect_keyword(tokens, "normal", facet_index)?;
    let normal = read_vertex(tokens, facet_index)?;

    expect_keyword(tokens, "outer", facet_index)?;
    expect_keyword(tokens, "loop", facet_index)?;

    let verts = [
        read_loop_vertex(tokens, facet_index)?,
        read_loop_vertex(tokens, facet_index)?,
        read_loop_vertex(tokens, facet_index)?,
    ];

    expect_keyword(tokens, "endloop", facet_index)?;
    expect_keyword(tokens, "endfacet", facet_index)?;

    Ok(Facet { normal, verts })
}

/// The optional free-form name between `solid` and the first keyword
fn read_solid_name(tokens: &mut Tokens) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    loop {
        match tokens.peek() {
            Some(&"facet") | Some(&"endsolid") | None => break,
            Some(&token) => {
                parts.push(token);
                tokens.next();
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn read_loop_vertex(tokens: &mut Tokens, facet_index: usize) -> Result<Vertex, DecodeError> {
    expect_keyword(tokens, "vertex", facet_index)?;
    read_vertex(tokens, facet_index)
}

fn read_vertex(tokens: &mut Tokens, facet_index: usize) -> Result<Vertex, DecodeError> {
    let (x, y, z) = tokens
        .next_tuple()
        .ok_or(DecodeError::MalformedFile { facet_index })?;

    Ok(Vertex {
        x: parse_float(x, facet_index)?,
        y: parse_float(y, facet_index)?,
        z: parse_float(z, facet_index)?,
    })
}

fn parse_float(token: &str, facet_index: usize) -> Result<f64, DecodeError> {
    token
        .parse()
        .map_err(|_| DecodeError::MalformedFile { facet_index })
}

fn expect_keyword(
    tokens: &mut Tokens,
    keyword: &str,
    facet_index: usize,
) -> Result<(), DecodeError> {
    if tokens.next() == Some(keyword) {
        Ok(())
    } else {
        Err(DecodeError::MalformedFile { facet_index })
    }
}
