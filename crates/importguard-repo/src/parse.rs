//! Go import scanner.
//!
//! Reads just enough of a Go source file to list its imports: the `package` clause
//! followed by any number of `import` declarations. Scanning stops at the first other
//! top-level declaration, so function bodies are never tokenized.

use importguard_domain::model::ImportDecl;
use importguard_types::{Location, RepoPath};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoSource {
    pub package: String,
    pub imports: Vec<ImportDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok<'a> {
    Ident(&'a str),
    Str(String),
    LParen,
    RParen,
    Semi,
    Dot,
    Other(char),
    Eof,
}

#[derive(Clone, Debug)]
struct Token<'a> {
    tok: Tok<'a>,
    line: u32,
    col: u32,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    line_start: usize,
}

pub fn parse_go_source(path: &RepoPath, text: &str) -> anyhow::Result<GoSource> {
    let mut lx = Lexer::new(text);

    let t = lx.next_significant()?;
    if t.tok != Tok::Ident("package") {
        anyhow::bail!("{}:{}: expected `package` clause", t.line, t.col);
    }
    let t = lx.next_token()?;
    let Tok::Ident(package) = t.tok else {
        anyhow::bail!("{}:{}: expected package name", t.line, t.col);
    };

    let mut imports = Vec::new();
    loop {
        let t = lx.next_significant()?;
        if t.tok != Tok::Ident("import") {
            break;
        }

        let first = lx.next_token()?;
        if first.tok == Tok::LParen {
            loop {
                let t = lx.next_significant()?;
                match t.tok {
                    Tok::RParen => break,
                    Tok::Eof => anyhow::bail!("{}:{}: unterminated import group", t.line, t.col),
                    _ => imports.push(parse_spec(&mut lx, path, t)?),
                }
            }
        } else {
            imports.push(parse_spec(&mut lx, path, first)?);
        }
    }

    Ok(GoSource {
        package: package.to_string(),
        imports,
    })
}

/// `[name | "."] "path"`, starting at `first`.
fn parse_spec(lx: &mut Lexer<'_>, file: &RepoPath, first: Token<'_>) -> anyhow::Result<ImportDecl> {
    let (alias, path_tok) = match first.tok {
        Tok::Ident(name) => (Some(name.to_string()), lx.next_token()?),
        Tok::Dot => (Some(".".to_string()), lx.next_token()?),
        Tok::Str(_) => (None, first.clone()),
        _ => anyhow::bail!("{}:{}: expected import path", first.line, first.col),
    };

    let Tok::Str(path) = path_tok.tok else {
        anyhow::bail!(
            "{}:{}: expected import path string",
            path_tok.line,
            path_tok.col
        );
    };
    if path.is_empty() {
        anyhow::bail!("{}:{}: empty import path", path_tok.line, path_tok.col);
    }

    Ok(ImportDecl {
        path,
        alias,
        location: Some(Location {
            path: file.clone(),
            line: Some(first.line),
            col: Some(first.col),
        }),
    })
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        let pos = if src.starts_with('\u{feff}') { 3 } else { 0 };
        Self {
            src,
            pos,
            line: 1,
            line_start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    fn col(&self) -> u32 {
        (self.pos - self.line_start + 1) as u32
    }

    /// Next token that is not a statement separator.
    fn next_significant(&mut self) -> anyhow::Result<Token<'a>> {
        loop {
            let t = self.next_token()?;
            if t.tok != Tok::Semi {
                return Ok(t);
            }
        }
    }

    fn next_token(&mut self) -> anyhow::Result<Token<'a>> {
        self.skip_trivia()?;
        let (line, col) = (self.line, self.col());
        let token = |tok| Token { tok, line, col };

        let Some(c) = self.peek() else {
            return Ok(token(Tok::Eof));
        };

        let tok = match c {
            '(' => {
                self.bump();
                Tok::LParen
            }
            ')' => {
                self.bump();
                Tok::RParen
            }
            ';' => {
                self.bump();
                Tok::Semi
            }
            '.' => {
                self.bump();
                Tok::Dot
            }
            '"' => Tok::Str(self.interpreted_string(line, col)?),
            '`' => Tok::Str(self.raw_string(line, col)?),
            c if is_ident_start(c) => {
                let src = self.src;
                let start = self.pos;
                while self.peek().is_some_and(is_ident_continue) {
                    self.bump();
                }
                Tok::Ident(&src[start..self.pos])
            }
            other => {
                self.bump();
                Tok::Other(other)
            }
        };
        Ok(token(tok))
    }

    fn skip_trivia(&mut self) -> anyhow::Result<()> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, col) = (self.line, self.col());
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => anyhow::bail!("{line}:{col}: unterminated block comment"),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn raw_string(&mut self, line: u32, col: u32) -> anyhow::Result<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('`') => return Ok(out),
                Some('\r') => {}
                Some(c) => out.push(c),
                None => anyhow::bail!("{line}:{col}: unterminated raw string"),
            }
        }
    }

    fn interpreted_string(&mut self, line: u32, col: u32) -> anyhow::Result<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.escape(line, col)?),
                Some('\n') | None => anyhow::bail!("{line}:{col}: unterminated string literal"),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, line: u32, col: u32) -> anyhow::Result<char> {
        let c = match self.bump() {
            Some('a') => '\u{07}',
            Some('b') => '\u{08}',
            Some('f') => '\u{0c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\u{0b}',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('x') => self.code_point(16, 2, line, col)?,
            Some('u') => self.code_point(16, 4, line, col)?,
            Some('U') => self.code_point(16, 8, line, col)?,
            Some(d @ '0'..='7') => {
                let rest = self.code_point(8, 2, line, col)? as u32;
                let value = (d as u32 - '0' as u32) * 64 + rest;
                char::from_u32(value)
                    .ok_or_else(|| anyhow::anyhow!("{line}:{col}: invalid octal escape"))?
            }
            _ => anyhow::bail!("{line}:{col}: unknown escape sequence"),
        };
        Ok(c)
    }

    fn code_point(&mut self, radix: u32, digits: usize, line: u32, col: u32) -> anyhow::Result<char> {
        let mut value: u32 = 0;
        for _ in 0..digits {
            let d = self
                .bump()
                .and_then(|c| c.to_digit(radix))
                .ok_or_else(|| anyhow::anyhow!("{line}:{col}: invalid escape sequence"))?;
            value = value * radix + d;
        }
        char::from_u32(value).ok_or_else(|| anyhow::anyhow!("{line}:{col}: invalid code point"))
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
