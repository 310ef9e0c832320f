//! Typed shell command assembly.
//!
//! Commands are built as argument lists and serialized to a shell line only
//! at the transport boundary. Arguments are quoted by default; an argument
//! that *must* be expanded by the remote shell (`$HOME`, `$(dirname …)`) is
//! marked [`ShellArg::Raw`] explicitly at the call site.

use std::fmt;

/// One argument of a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellArg {
    /// Quoted as needed; reaches the remote program byte-for-byte.
    Literal(String),
    /// Emitted verbatim; the remote shell expands it. The caller is
    /// responsible for any quoting inside the raw text.
    Raw(String),
}

impl ShellArg {
    fn render(&self) -> String {
        match self {
            Self::Literal(s) => quote(s),
            Self::Raw(s) => s.clone(),
        }
    }
}

/// A program plus its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<ShellArg>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    /// Append a quoted argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(ShellArg::Literal(arg.into()));
        self
    }

    /// Append several quoted arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|a| ShellArg::Literal(a.into())));
        self
    }

    /// Append an argument the remote shell must expand.
    pub fn raw_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(ShellArg::Raw(arg.into()));
        self
    }

    /// Append an optional flag (skipped when `None`).
    pub fn flag(mut self, flag: Option<&'static str>) -> Self {
        if let Some(f) = flag {
            self.args.push(ShellArg::Literal(f.to_string()));
        }
        self
    }

    /// Serialize to one shell line.
    pub fn render(&self) -> String {
        let mut line = quote(&self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.render());
        }
        line
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Double-quote a remote path so `$HOME` expands but spaces survive.
pub fn expandable_path(path: &str) -> String {
    format!("\"{path}\"")
}

/// Single-quote a string when it contains anything the shell treats
/// specially. Plain words pass through untouched.
pub fn quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'/' | b':' | b'@' | b'%' | b'+' | b'=' | b',')
        });
    if safe {
        s.to_string()
    } else {
        // POSIX single-quote escape: close, escaped quote, reopen.
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
