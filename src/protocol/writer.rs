//! Write side of the protocol: render the fixed XML templates.
//!
//! The documents are assembled by hand instead of going through a
//! serializer: the consumer expects this exact layout, and every field is
//! produced by this program, so nothing needs escaping.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::domain::{InitMode, ResultRecord, LOWER_BOUNDARY, N_VARS, UPPER_BOUNDARY};
use crate::error::{Error, Result};

/// Write the problem-setup document describing one fresh parameter set.
pub fn write_setup(path: &Path, init: InitMode) -> Result<()> {
    let doc = render_setup(init, &command_name(), &current_time());
    debug!(path = %path.display(), ?init, "writing setup file");
    std::fs::write(path, doc).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the results document for one evaluated parameter set.
pub fn write_result(path: &Path, record: &ResultRecord) -> Result<()> {
    let doc = render_result(record, &command_name(), &current_time());
    debug!(path = %path.display(), iteration = record.iteration, "writing results file");
    std::fs::write(path, doc).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn render_setup(init: InitMode, command: &str, timestamp: &str) -> String {
    let mut doc = format!(
        "<!--\n    Problem setup file created by {command}\n    on {timestamp}\n-->\n\
         <batch>\n\
         \x20 <dataType>setup_data</dataType>\n\
         \x20 <runID>0</runID>\n\
         \x20 <nIndividuals>1</nIndividuals>\n\
         \x20 <individuals>\n\
         \x20   <individual0>\n\
         \x20     <type>GParameterSet</type>\n\
         \x20     <nVars>{N_VARS}</nVars>\n\
         \x20     <vars>\n"
    );
    let value = init.initial_value();
    let randomize = init.randomize();
    for i in 0..N_VARS {
        let _ = write!(
            doc,
            "\x20       <var{i}>\n\
             \x20         <name>coord_{i}</name>\n\
             \x20         <type>GConstrainedDoubleObject</type>\n\
             \x20         <baseType>double</baseType>\n\
             \x20         <isLeaf>true</isLeaf>\n\
             \x20         <nVals>1</nVals>\n\
             \x20         <values>\n\
             \x20           <value0>{value:.1}</value0>\n\
             \x20         </values>\n\
             \x20         <lowerBoundary>{LOWER_BOUNDARY:.1}</lowerBoundary>\n\
             \x20         <upperBoundary>{UPPER_BOUNDARY:.1}</upperBoundary>\n\
             \x20         <initRandom>{randomize}</initRandom>\n\
             \x20       </var{i}>\n"
        );
    }
    doc.push_str(
        "      </vars>\n\
         \x20     <nBounds>0</nBounds>\n\
         \x20     <nResults>1</nResults>\n\
         \x20   </individual0>\n\
         \x20 </individuals>\n\
         </batch>\n",
    );
    doc
}

fn render_result(record: &ResultRecord, command: &str, timestamp: &str) -> String {
    let ResultRecord {
        iteration,
        id,
        raw_result,
        is_valid,
        is_dirty,
    } = record;
    // {:?} round-trips the f64 exactly and keeps the trailing .0 on whole
    // numbers, which is what the consumer's parser expects.
    format!(
        "<!--\n    Results file created by {command}\n    on {timestamp}\n    for iteration {iteration}\n-->\n\
         <batch>\n\
         \x20 <dataType>run_results</dataType>\n\
         \x20 <runID>0</runID>\n\
         \x20 <nIndividuals>1</nIndividuals>\n\
         \x20 <individuals>\n\
         \x20   <individual0>\n\
         \x20     <iteration>{iteration}</iteration>\n\
         \x20     <id>{id}</id>\n\
         \x20     <isValid>{is_valid}</isValid>\n\
         \x20     <isDirty>{is_dirty}</isDirty>\n\
         \x20     <nResults>1</nResults>\n\
         \x20     <results>\n\
         \x20       <rawResult0>{raw_result:?}</rawResult0>\n\
         \x20     </results>\n\
         \x20   </individual0>\n\
         \x20 </individuals>\n\
         </batch>\n"
    )
}

/// Basename of the running executable, for the comment headers.
fn command_name() -> String {
    let argv0 = std::env::args().next().unwrap_or_default();
    Path::new(&argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

/// Current local date/time, for the comment headers.
fn current_time() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
}
