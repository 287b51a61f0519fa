// crates/usecase/src/decomposer.rs
use std::mem;

use decompose_inp_domain::{
    model::Property,
    numbering::{NumberingTable, RangeMatch, Resolution},
    options::TrailingRun,
    progress,
};
use decompose_inp_ports::{
    host::{EntityHandle, HostModel, Member},
    numbering::NumberingSource,
    progress::ProgressSink,
};
use decompose_inp_shared_kernel::{ApplicationError, DecomposeError, EntityId, EntityName, Result};
use log::{debug, info, warn};

use crate::{dto::DecompositionReport, options::DecomposeOptions};

/// Splits the host model's properties into one include per numbering range.
pub struct Decomposer<'a> {
    host: &'a mut dyn HostModel,
    progress: &'a dyn ProgressSink,
    options: DecomposeOptions,
}

impl<'a> Decomposer<'a> {
    pub fn new(host: &'a mut dyn HostModel, progress: &'a dyn ProgressSink) -> Self {
        Self { host, progress, options: DecomposeOptions::default() }
    }

    pub fn with_options(mut self, options: DecomposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Load the table, collect every property from the host and decompose.
    pub fn run(&mut self, source: &dyn NumberingSource) -> Result<DecompositionReport> {
        let table = source.load().map_err(|err| ApplicationError::TableLoadFailed {
            reason: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        let properties = self.host.collect_properties().map_err(host_failure("collect_properties"))?;
        self.decompose(properties, &table)
    }

    /// Group `properties` by the table row owning their id.
    ///
    /// Host failures abort the run; groups flushed before the failure stay in
    /// the host model.
    pub fn decompose(&mut self, properties: Vec<Property>, table: &NumberingTable) -> Result<DecompositionReport> {
        self.progress.set_visible(true);
        let outcome = self.walk(properties, table);
        self.progress.set_visible(false);
        outcome
    }

    fn walk(&mut self, mut properties: Vec<Property>, table: &NumberingTable) -> Result<DecompositionReport> {
        properties.sort_by_key(|p| p.id);
        let total = properties.len();
        let mut report = DecompositionReport { total_properties: total, ..Default::default() };

        let mut open: Option<RangeMatch> = None;
        let mut cursor = 0;
        let mut buffer: Vec<Property> = Vec::new();

        for (index, property) in properties.into_iter().enumerate() {
            if open.as_ref().is_some_and(|m| m.range.contains(property.id)) {
                buffer.push(property);
                continue;
            }

            // buffer is only ever filled while a range is open
            if let Some(current) = open.as_ref().filter(|_| !buffer.is_empty()) {
                self.flush(current, mem::take(&mut buffer), &mut report)?;
                self.progress.report(progress::percent(index, total));
            }

            match table.resolve(cursor, &property) {
                Resolution::Found(found) => {
                    cursor = found.index;
                    buffer.push(property);
                    open = Some(found);
                }
                Resolution::Unknown(unknown) => {
                    warn!("{unknown}");
                    report.unmatched.push(unknown);
                }
            }
        }

        if let Some(current) = open.as_ref().filter(|_| !buffer.is_empty()) {
            match self.options.trailing_run {
                TrailingRun::Flush => self.flush(current, buffer, &mut report)?,
                TrailingRun::Drop => {
                    warn!("dropping final run of {} properties for '{}'", buffer.len(), current.name);
                    report.dropped = buffer;
                }
            }
        }

        self.progress.report(100);
        info!(
            "decomposed {} properties into {} groups ({} unmatched)",
            total,
            report.groups.len(),
            report.unmatched.len()
        );
        Ok(report)
    }

    fn flush(&mut self, range: &RangeMatch, properties: Vec<Property>, report: &mut DecompositionReport) -> Result<()> {
        let (handle, created) = self.group_handle(&range.name, range.range.min)?;

        let members: Vec<Member> = properties.iter().map(Member::from).collect();
        self.host.add_members(handle, &members).map_err(host_failure("add_members"))?;

        let elements = self
            .host
            .collect_elements_referencing(&properties)
            .map_err(host_failure("collect_elements_referencing"))?;
        let members: Vec<Member> = elements.iter().map(Member::from).collect();
        self.host.add_members(handle, &members).map_err(host_failure("add_members"))?;

        debug!(
            "{} '{}' {}: {} properties, {} elements",
            self.options.group_kind,
            range.name,
            range.range,
            properties.len(),
            elements.len()
        );

        if created {
            report.created.push(range.name.clone());
        }
        report.record_flush(range, properties, elements);
        Ok(())
    }

    /// Existing entity of the group kind named `name`, or a new one numbered `id`.
    fn group_handle(&mut self, name: &EntityName, id: i64) -> Result<(EntityHandle, bool)> {
        let existing = self
            .host
            .find_entities_by_name(name)
            .map_err(host_failure("find_entities_by_name"))?
            .into_iter()
            .find(|record| record.kind == self.options.group_kind);
        if let Some(record) = existing {
            return Ok((record.handle, false));
        }

        let handle = self
            .host
            .create_entity(&self.options.group_kind, name)
            .map_err(host_failure("create_entity"))?;
        self.host.set_entity_id(handle, EntityId::new(id)).map_err(host_failure("set_entity_id"))?;
        Ok((handle, true))
    }
}

fn host_failure(operation: &'static str) -> impl FnOnce(DecomposeError) -> DecomposeError {
    move |err| {
        ApplicationError::HostOperationFailed {
            operation: operation.to_string(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        }
        .into()
    }
}
