// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::Path;

use crate::Package;

/// Characters that end a capability token, in addition to whitespace.
const TOKEN_TERMINATORS: &[char] = &['-', '=', '>', '!', '<', '/'];

/// Extracts the capability token from a `\t<key>: <token> <decoration...>`
/// line.
///
/// The token starts two characters after the first `:` and stops at the
/// first whitespace or version operator, so `lib:libfoo >= 1.2` yields
/// `lib:libfoo`.
pub fn extract_token(line: &str) -> &str {
    let rest = match line.find(':') {
        Some(pos) => line.get(pos + 2..).unwrap_or(""),
        None => line,
    };
    let end = rest
        .find(|c: char| c.is_whitespace() || TOKEN_TERMINATORS.contains(&c))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Builds a [`Package`] from the output of `package list -i <path>`.
///
/// `supplements` lines are treated as requirements. Unrecognized lines are
/// ignored.
pub fn parse_package_listing(path: &Path, listing: &str) -> Package {
    let mut package = Package {
        path: path.to_owned(),
        ..Default::default()
    };
    for line in listing.lines() {
        if line.starts_with("\tprovides: ") {
            package.provides.insert(extract_token(line).to_owned());
        } else if line.starts_with("\trequires: ") || line.starts_with("\tsupplements: ") {
            package.requires.insert(extract_token(line).to_owned());
        } else if line.starts_with("\tname: ") {
            package.name = extract_token(line).to_owned();
        }
    }
    package
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const LISTING: &str = "\
package-attributes:
\tname: gcc_syslibs
\tversion: 13.2.0_2023_08_10-1
\tarchitecture: x86_64
\tprovides: gcc_syslibs = 13.2.0_2023_08_10-1
\tprovides: lib:libgcc_s = 1 compat >= 1
\tprovides: lib:libstdc++ = 6.0.32 compat >= 6
\trequires: haiku >= r1~beta4_hrev57000
\tsupplements: lib:libgomp
";

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token("\tname: haiku"), "haiku");
        assert_eq!(extract_token("\tprovides: cmd:sh = 5.2"), "cmd:sh");
        assert_eq!(extract_token("\trequires: haiku>=r1~beta4"), "haiku");
        assert_eq!(extract_token("\trequires: lib:libz-1.2"), "lib:libz");
        assert_eq!(extract_token("\trequires: foo!bar"), "foo");
        assert_eq!(extract_token("\trequires: foo/bar"), "foo");
        assert_eq!(extract_token("\trequires: foo<2"), "foo");
        assert_eq!(extract_token("\trequires: foo\tbar"), "foo");
        assert_eq!(extract_token("\tprovides: lonely"), "lonely");
    }

    #[test]
    fn test_extract_token_degenerate_lines() {
        assert_eq!(extract_token("\tname:"), "");
        assert_eq!(extract_token("\tname: "), "");
    }

    #[test]
    fn test_parse_package_listing() {
        let package = parse_package_listing(Path::new("/system/packages/gcc.hpkg"), LISTING);
        assert_eq!(
            package,
            Package::new(
                "gcc_syslibs",
                "/system/packages/gcc.hpkg",
                &["gcc_syslibs", "lib:libgcc_s", "lib:libstdc++"],
                &["haiku", "lib:libgomp"],
            )
        );
    }

    #[test]
    fn test_parse_package_listing_without_name() {
        let package = parse_package_listing(Path::new("x.hpkg"), "\tprovides: x\n");
        assert_eq!(package.name, "");
        assert_eq!(package.provides.len(), 1);
        assert!(package.requires.is_empty());
    }

    #[test]
    fn test_parse_ignores_untabbed_lines() {
        let package = parse_package_listing(Path::new("x.hpkg"), "provides: x\n  requires: y\n");
        assert!(package.provides.is_empty());
        assert!(package.requires.is_empty());
    }
}
