//! Read side of the protocol: parse a parameter-set document.
//!
//! The schema is fixed (`batch/individuals/individual0` with positional
//! `var0..var3` entries), so the extraction walks exact paths instead of
//! mapping through a serializer. Only `iteration` and `id` are lenient;
//! everything else that is missing or malformed aborts the run.

use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::domain::{ParameterSet, N_VARS, UNKNOWN_ID, UNKNOWN_ITERATION};
use crate::error::{Error, Result};

/// Read and validate a parameter-set file.
pub fn read_parameter_set(path: &Path) -> Result<ParameterSet> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = Document::parse(&text).map_err(|source| Error::XmlParse {
        path: path.to_path_buf(),
        source,
    })?;
    let params = extract_parameter_set(&doc)?;
    debug!(
        iteration = params.iteration,
        id = %params.id,
        "read parameter set"
    );
    Ok(params)
}

/// First element child with the given tag name.
fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// Trimmed text content of the named child, if both exist.
fn child_text<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<&'a str> {
    let text = child(node, name)?.text()?.trim();
    (!text.is_empty()).then_some(text)
}

fn extract_parameter_set(doc: &Document) -> Result<ParameterSet> {
    let individual = child(doc.root_element(), "individuals")
        .and_then(|n| child(n, "individual0"))
        .ok_or_else(|| Error::Malformed("missing individuals/individual0 element".into()))?;

    // The optimizer may omit these two; fall back instead of failing the run.
    let iteration = child_text(individual, "iteration")
        .and_then(|t| t.parse().ok())
        .unwrap_or(UNKNOWN_ITERATION);
    let id = child_text(individual, "id")
        .map_or_else(|| UNKNOWN_ID.to_string(), str::to_string);

    let n_vars: usize = child_text(individual, "nVars")
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Malformed("missing or unparsable nVars element".into()))?;
    if n_vars != N_VARS {
        return Err(Error::UnexpectedVarCount {
            found: n_vars,
            expected: N_VARS,
        });
    }

    // Leaf variables are the entries carrying an <isLeaf> marker; their
    // count must match the declared nVars before any value is touched.
    // descendants() yields the container itself first; only strict
    // descendants are in scope here.
    let leaves = individual
        .descendants()
        .skip(1)
        .filter(|n| n.is_element() && child(*n, "isLeaf").is_some())
        .count();
    if leaves != n_vars {
        return Err(Error::ParameterCountMismatch {
            declared: n_vars,
            found: leaves,
        });
    }

    let vars = child(individual, "vars")
        .ok_or_else(|| Error::Malformed("missing vars element".into()))?;
    let mut values = [0.0; N_VARS];
    for (i, slot) in values.iter_mut().enumerate() {
        let tag = format!("var{i}");
        let text = child(vars, &tag)
            .and_then(|v| child(v, "values"))
            .and_then(|v| child_text(v, "value0"))
            .ok_or_else(|| Error::Malformed(format!("missing value for {tag}")))?;
        *slot = text
            .parse()
            .map_err(|_| Error::Malformed(format!("non-numeric value for {tag}: '{text}'")))?;
    }

    Ok(ParameterSet {
        iteration,
        id,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var_block(index: usize, value: &str) -> String {
        format!(
            "<var{index}><name>coord_{index}</name><isLeaf>true</isLeaf>\
             <values><value0>{value}</value0></values></var{index}>"
        )
    }

    fn document(iteration: &str, id: &str, n_vars: &str, vars: &[String]) -> String {
        format!(
            "<batch><individuals><individual0>{iteration}{id}<nVars>{n_vars}</nVars>\
             <vars>{}</vars></individual0></individuals></batch>",
            vars.join("")
        )
    }

    fn parse(xml: &str) -> Result<ParameterSet> {
        extract_parameter_set(&Document::parse(xml).unwrap())
    }

    fn four_vars() -> Vec<String> {
        (0..4)
            .map(|i| var_block(i, &format!("{}.0", i + 1)))
            .collect()
    }

    #[test]
    fn extracts_iteration_id_and_values_in_order() {
        let xml = document(
            "<iteration>17</iteration>",
            "<id>ind-17-0</id>",
            "4",
            &four_vars(),
        );
        let params = parse(&xml).unwrap();
        assert_eq!(params.iteration, 17);
        assert_eq!(params.id, "ind-17-0");
        assert_eq!(params.values, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn missing_iteration_and_id_fall_back_to_defaults() {
        let xml = document("", "", "4", &four_vars());
        let params = parse(&xml).unwrap();
        assert_eq!(params.iteration, UNKNOWN_ITERATION);
        assert_eq!(params.id, UNKNOWN_ID);
    }

    #[test]
    fn unparsable_iteration_falls_back_to_default() {
        let xml = document("<iteration>soon</iteration>", "", "4", &four_vars());
        assert_eq!(parse(&xml).unwrap().iteration, UNKNOWN_ITERATION);
    }

    #[test]
    fn declared_var_count_other_than_four_is_fatal() {
        let xml = document("", "", "5", &four_vars());
        assert!(matches!(
            parse(&xml),
            Err(Error::UnexpectedVarCount {
                found: 5,
                expected: 4
            })
        ));
    }

    #[test]
    fn missing_n_vars_is_fatal() {
        let xml = document("", "", "", &four_vars());
        assert!(matches!(parse(&xml), Err(Error::Malformed(_))));
    }

    #[test]
    fn leaf_count_mismatch_is_fatal() {
        let mut vars = four_vars();
        vars.pop();
        let xml = document("", "", "4", &vars);
        assert!(matches!(
            parse(&xml),
            Err(Error::ParameterCountMismatch {
                declared: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn leaf_marker_directly_under_individual_is_not_counted() {
        // Only strict descendants of individual0 are leaf candidates; a
        // marker on the container itself must not inflate the count.
        let xml = document("<isLeaf>true</isLeaf>", "", "4", &four_vars());
        let params = parse(&xml).unwrap();
        assert_eq!(params.values, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn missing_individual_container_is_fatal() {
        assert!(matches!(
            parse("<batch><individuals/></batch>"),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn non_numeric_value_is_fatal() {
        let mut vars = four_vars();
        vars[2] = var_block(2, "three");
        let xml = document("", "", "4", &vars);
        assert!(matches!(parse(&xml), Err(Error::Malformed(_))));
    }

    #[test]
    fn whitespace_around_values_is_tolerated() {
        let mut vars = four_vars();
        vars[0] = var_block(0, "\n  1.5  \n");
        let xml = document("", "", "4", &vars);
        assert_eq!(parse(&xml).unwrap().values[0], 1.5);
    }

    #[test]
    fn read_rejects_malformed_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xml");
        std::fs::write(&path, "<batch><individuals>").unwrap();
        assert!(matches!(
            read_parameter_set(&path),
            Err(Error::XmlParse { .. })
        ));
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xml");
        assert!(matches!(
            read_parameter_set(&path),
            Err(Error::ReadInput { .. })
        ));
    }
}
