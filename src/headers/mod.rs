//! Static catalog of known request headers, driving autocompletion.
//!
//! # Design Decisions
//! - Plain `&'static` table; the catalog is data, not behavior
//! - `complete` only offers suggestions while the line prefix is still a
//!   bare token (optional indent plus one unfinished word); once a value
//!   is being typed the catalog stays silent
//! - Docs are markdown, rendered by the host surface

/// One catalog entry: a header name, its well-known values (when the
/// header has a closed set), and markdown documentation.
#[derive(Debug)]
pub struct HeaderSpec {
    pub name: &'static str,
    pub values: &'static [&'static str],
    pub doc: &'static str,
}

/// Suggest catalog entries for a header-section line prefix.
///
/// The prefix is everything on the line left of the cursor. Suggestions
/// are filtered case-insensitively by the typed token.
pub fn complete(line_prefix: &str) -> Vec<&'static HeaderSpec> {
    let token = line_prefix.trim_start_matches([' ', '\t']);
    if token.contains([' ', '\t']) {
        return Vec::new();
    }
    let token = token.to_ascii_lowercase();
    REQUEST_HEADERS
        .iter()
        .filter(|spec| spec.name.to_ascii_lowercase().starts_with(&token))
        .collect()
}

/// Exact-name catalog lookup.
pub fn lookup(name: &str) -> Option<&'static HeaderSpec> {
    REQUEST_HEADERS.iter().find(|spec| spec.name == name)
}

/// Known request headers, after the MDN HTTP header reference.
pub const REQUEST_HEADERS: &[HeaderSpec] = &[
    HeaderSpec {
        name: "Accept",
        values: &[],
        doc: "The `Accept` request header advertises which content types, expressed as MIME \
              types, the client is able to understand. The server uses content negotiation to \
              select one of the proposals and reports its choice with the `Content-Type` \
              response header.\n\n\
              ``` yaml\n\
              Accept: <MIME_type>/<MIME_subtype>\n\
              Accept: <MIME_type>/*\n\
              Accept: */*\n\
              Accept: text/html, application/xhtml+xml, application/xml;q=0.9, */*;q=0.8\n\
              ```",
    },
    HeaderSpec {
        name: "Accept-Charset",
        values: &[],
        doc: "The `Accept-Charset` request header advertises which character sets the client \
              understands. If no matching character set can be served the server may answer \
              `406 Not Acceptable`, though ignoring the header is the more common choice.\n\n\
              ``` yaml\n\
              Accept-Charset: <charset>\n\
              Accept-Charset: utf-8, iso-8859-1;q=0.5\n\
              ```",
    },
    HeaderSpec {
        name: "Accept-Encoding",
        values: &[],
        doc: "The `Accept-Encoding` request header advertises which content encodings, usually \
              compression algorithms, the client understands. The server reports its choice \
              with the `Content-Encoding` response header. As long as `identity` is not \
              explicitly forbidden, the server must never answer `406 Not Acceptable`.\n\n\
              ``` yaml\n\
              Accept-Encoding: gzip\n\
              Accept-Encoding: compress\n\
              Accept-Encoding: deflate\n\
              Accept-Encoding: br\n\
              Accept-Encoding: identity\n\
              Accept-Encoding: *\n\
              Accept-Encoding: deflate, gzip;q=1.0, *;q=0.5\n\
              ```",
    },
    HeaderSpec {
        name: "Accept-Language",
        values: &[],
        doc: "The `Accept-Language` request header advertises which natural languages the \
              client prefers. It is a hint for when the server has no better way to pick a \
              language; an explicit user choice should always win over it.\n\n\
              ``` yaml\n\
              Accept-Language: <language>\n\
              Accept-Language: *\n\
              Accept-Language: fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, *;q=0.5\n\
              ```",
    },
    HeaderSpec {
        name: "Access-Control-Request-Headers",
        values: &[],
        doc: "The `Access-Control-Request-Headers` request header is used in a preflight \
              request to tell the server which headers the actual request might carry.\n\n\
              ``` yaml\n\
              Access-Control-Request-Headers: <header-name>, <header-name>, ...\n\
              ```",
    },
    HeaderSpec {
        name: "Access-Control-Request-Method",
        values: &[],
        doc: "The `Access-Control-Request-Method` request header is used in a preflight \
              request to tell the server which method the actual request will use, since a \
              preflight is always an `OPTIONS` request.\n\n\
              ``` yaml\n\
              Access-Control-Request-Method: <method>\n\
              ```",
    },
    HeaderSpec {
        name: "Allow",
        values: &[],
        doc: "The `Allow` header lists the set of methods supported by a resource. It must be \
              sent alongside a `405 Method Not Allowed` response; an empty value means the \
              resource currently allows no methods at all.\n\n\
              ``` yaml\n\
              Allow: <http-methods>\n\
              ```",
    },
    HeaderSpec {
        name: "Authorization",
        values: &[],
        doc: "The `Authorization` request header carries the credentials that authenticate the \
              client with the server, usually after a `401 Unauthorized` response carrying a \
              `WWW-Authenticate` challenge.\n\n\
              ``` yaml\n\
              Authorization: <type> <credentials>\n\
              ```",
    },
];
