use std::path::Path;

use wgo_util::errors::WgoError;

/// The parts of a `go.mod` file needed to identify the current project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    /// Module path from the `module` directive.
    pub module: String,
    /// Language version from the `go` directive, if any.
    pub go: Option<String>,
    /// Preferred toolchain from the `toolchain` directive, if any.
    pub toolchain: Option<String>,
}

impl GoMod {
    /// Load and parse a `go.mod` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WgoError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        Self::parse(&content)
    }

    /// Parse `go.mod` content. Directives other than `module`, `go` and
    /// `toolchain` are skipped.
    pub fn parse(content: &str) -> miette::Result<Self> {
        let mut module = None;
        let mut go = None;
        let mut toolchain = None;
        let mut block: Option<String> = None;

        for (idx, raw) in content.lines().enumerate() {
            let lineno = idx + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            let mut tokens: Vec<&str> = line.split_whitespace().collect();

            let verb = if let Some(verb) = block.clone() {
                if line == ")" {
                    block = None;
                    continue;
                }
                verb
            } else {
                let mut verb = tokens.remove(0).to_string();
                // `module(` opens a block just like `module (`.
                if verb.len() > 1 && verb.ends_with('(') {
                    verb.pop();
                    tokens.insert(0, "(");
                }
                if tokens == ["("] {
                    block = Some(verb);
                    continue;
                }
                verb
            };

            match verb.as_str() {
                "module" => {
                    if module.is_some() {
                        return Err(parse_error(lineno, "repeated module statement"));
                    }
                    let [path] = tokens.as_slice() else {
                        return Err(parse_error(lineno, "usage: module module/path"));
                    };
                    module = Some(unquote(path).ok_or_else(|| {
                        parse_error(lineno, &format!("invalid quoted string {path}"))
                    })?);
                }
                "go" => {
                    let [version] = tokens.as_slice() else {
                        return Err(parse_error(lineno, "usage: go 1.23"));
                    };
                    go = Some((*version).to_string());
                }
                "toolchain" => {
                    let [name] = tokens.as_slice() else {
                        return Err(parse_error(lineno, "usage: toolchain go1.23.0"));
                    };
                    toolchain = Some((*name).to_string());
                }
                _ => {}
            }
        }

        if block.is_some() {
            return Err(WgoError::Manifest {
                message: "Failed to parse go.mod: unterminated block".to_string(),
            }
            .into());
        }

        let module = module.filter(|m| !m.is_empty()).ok_or_else(|| WgoError::Manifest {
            message: "Failed to parse go.mod: no module directive found".to_string(),
        })?;

        Ok(Self {
            module,
            go,
            toolchain,
        })
    }
}

fn parse_error(lineno: usize, message: &str) -> miette::Report {
    WgoError::Manifest {
        message: format!("Failed to parse go.mod: line {lineno}: {message}"),
    }
    .into()
}

/// Drop a trailing `//` comment that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q && !(q == '"' && prev == '\\') => quote = None,
            Some(_) => {}
            None if c == '"' || c == '`' => quote = Some(c),
            None if c == '/' && prev == '/' => return &line[..i - 1],
            None => {}
        }
        prev = c;
    }
    line
}

/// Remove Go string quoting from a module path token.
fn unquote(token: &str) -> Option<String> {
    let quoted = |q: char| token.len() >= 2 && token.starts_with(q) && token.ends_with(q);
    if quoted('`') {
        return Some(token[1..token.len() - 1].to_string());
    }
    if quoted('"') {
        let inner = &token[1..token.len() - 1];
        if inner.contains('\\') {
            return None;
        }
        return Some(inner.to_string());
    }
    if token.contains(['"', '`']) {
        return None;
    }
    Some(token.to_string())
}
