//! The crypto contract script.
//!
//! Upgrades the stock `string.h` contracts so `memcpy` and `memcmp` track
//! `crypto_chars` kinds, makes `memcmp` consume and conditionally return a
//! `network_permission`, and registers the `crypto.gh` predicates and lemmas
//! in the runtime manifest. Every payload is emitted verbatim; the annotation
//! language is never interpreted here.

use camino::Utf8Path;
use vfpatch_core::{Directive, InsertLine, LinePosition, ReplaceText};

/// Header line the `crypto.gh` include is inserted at.
pub const CRYPTO_INCLUDE_LINE: LinePosition = match LinePosition::new(5) {
    Some(position) => position,
    None => LinePosition::FIRST,
};

/// Ghost include pulling `crypto.gh` into the header.
pub const CRYPTO_INCLUDE: &str = "//@ #include <crypto.gh>\r\n";

/// Stock `memcpy` contract.
pub const MEMCPY_CONTRACT: &str = concat!(
    "    //@ requires chars(array, count, ?cs) &*& [?f]chars(array0, count, ?cs0);\r\n",
    "    //@ ensures chars(array, count, cs0) &*& [f]chars(array0, count, cs0);\r\n",
);

/// `memcpy` contract carrying the source's `crypto_chars` kind to the target.
pub const MEMCPY_CRYPTO_CONTRACT: &str = concat!(
    "    /*@ requires chars(array, count, ?cs) &*&\r\n",
    "                 [?f]crypto_chars(?kind, array0, count, ?cs0); @*/\r\n",
    "    /*@ ensures  crypto_chars(kind, array, count, cs0) &*&\r\n",
    "                 [f]crypto_chars(kind, array0, count, cs0); @*/\r\n",
);

/// Stock `memcmp` contract.
pub const MEMCMP_CONTRACT: &str = concat!(
    "    //@ requires [?f]chars(array, ?n, ?cs) &*& [?f0]chars(array0, ?n0, ?cs0) &*& ",
    "count <= n &*& count <= n0;\r\n",
    "    //@ ensures [f]chars(array, n, cs) &*& [f0]chars(array0, n0, cs0) &*& ",
    "true == ((result == 0) == (take(count, cs) == take(count, cs0)));\r\n",
);

/// `memcmp` contract that revokes the network permission after a failed
/// comparison against a secret.
pub const MEMCMP_CRYPTO_CONTRACT: &str = concat!(
    "    /*@ requires network_permission(?principal) &*& \r\n",
    "                 [?f1]crypto_chars(?kind1, array, ?n1, ?cs) &*&\r\n",
    "                 [?f2]crypto_chars(?kind2, array0, ?n2, ?cs0) &*& \r\n",
    "                 count <= n1 &*& count <= n2; @*/\r\n",
    "    /*@ ensures  [f1]crypto_chars(kind1, array, n1, cs) &*&\r\n",
    "                 [f2]crypto_chars(kind2, array0, n2, cs0) &*&\r\n",
    "                 true == ((result == 0) == (take(count, cs) == take(count, cs0))) &*&\r\n",
    "                 (\r\n",
    "                   //if guessing a secret value failed, network permissions are revoked\r\n",
    "                   // *otherwise one could keep guessing untill success\r\n",
    "                   result != 0 && (kind1 == secret || kind2 == secret) ?\r\n",
    "                       true : network_permission(principal)\r\n",
    "                 ); @*/\r\n",
);

/// Manifest declarations for the `crypto.gh` predicates and lemmas.
pub const CRYPTO_MANIFEST_DECLARATIONS: &str = concat!(
    ".predicate @./crypto.gh#network_permission\r\n",
    ".predicate @./crypto.gh#crypto_chars\r\n",
    ".provides ./crypto.gh#crypto_chars_to_chars\r\n",
    ".provides ./crypto.gh#chars_to_crypto_chars\r\n",
    ".provides ./crypto.gh#chars_to_secret_crypto_chars\r\n",
    ".provides ./crypto.gh#crypto_chars_inv\r\n",
    ".provides ./crypto.gh#crypto_chars_limits\r\n",
    ".provides ./crypto.gh#crypto_chars_distinct\r\n",
    ".provides ./crypto.gh#crypto_chars_split\r\n",
    ".provides ./crypto.gh#crypto_chars_join\r\n",
);

/// Builds the four crypto contract directives in execution order.
///
/// Step 1 inserts before the contract blocks, so steps 2 and 3 still find
/// them verbatim; step 4 is the only one touching the manifest.
#[must_use]
pub fn crypto_contracts(header: &Utf8Path, manifest: &Utf8Path) -> Vec<Directive> {
    vec![
        InsertLine::new(header, CRYPTO_INCLUDE_LINE, CRYPTO_INCLUDE).into(),
        ReplaceText::new(header, MEMCPY_CONTRACT, MEMCPY_CRYPTO_CONTRACT).into(),
        ReplaceText::new(header, MEMCMP_CONTRACT, MEMCMP_CRYPTO_CONTRACT).into(),
        InsertLine::new(manifest, LinePosition::FIRST, CRYPTO_MANIFEST_DECLARATIONS).into(),
    ]
}
