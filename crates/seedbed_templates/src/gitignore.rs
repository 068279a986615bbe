//! Ignore-file content written after a successful `git init`.

/// Static `.gitignore` for a Python project.
pub fn gitignore() -> &'static str {
    r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
build/
dist/
eggs/
.eggs/
*.egg-info/
*.egg
wheels/
sdist/
MANIFEST

# Unit test / coverage reports
.pytest_cache/
.tox/
.nox/
.coverage
.coverage.*
htmlcov/
coverage.xml
nosetests.xml

# Jupyter Notebook
.ipynb_checkpoints

# Environments
.env
.venv
env/
venv/
ENV/
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitignore_covers_required_groups() {
        let lines: Vec<&str> = gitignore().lines().collect();
        for pattern in ["__pycache__/", "*.py[cod]", "dist/", "*.egg-info/", ".pytest_cache/", ".coverage", "venv/"] {
            assert!(lines.contains(&pattern), "missing pattern {pattern}");
        }
    }

    #[test]
    fn test_gitignore_ends_with_newline() {
        assert!(gitignore().ends_with('\n'));
    }
}
