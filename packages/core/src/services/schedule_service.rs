//! Self-Paced Schedule Derivation
//!
//! `ScheduleService` turns a course content tree into a flat list of
//! per-node date overrides. Dates come from one of two mechanisms:
//!
//! - **Custom pacing**: a subsection authored with `due_num_weeks` pushes
//!   that relative due date onto itself and its descendants
//! - **Even spacing**: assignment-bearing sections without custom pacing are
//!   spread evenly across the course's expected duration
//!
//! The closer mechanism always wins: `due_num_weeks` on a section overrides
//! whatever even spacing would have produced for it.
//!
//! Open-response assessments manage their own deadlines and are exempt
//! throughout (see [`crate::models::DATE_EXEMPT_CATEGORIES`]): they neither
//! qualify a section as assignment-bearing nor receive derived dates.

use crate::models::{Category, CourseNode, DateItem, DateOverride, NodeKey};
use crate::services::ScheduleError;
use crate::store::{CourseStore, DurationSource};
use chrono::Duration;
use std::collections::HashMap;

/// Feature configuration for schedule derivation.
///
/// Injected per service instance; the core reads no ambient global state.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Master switch for self-paced relative date derivation. Disabled,
    /// extraction emits only the course-root marker.
    pub relative_dates_enabled: bool,

    /// Honor per-section `due_num_weeks` overrides. Disabled, such sections
    /// fall back to the even-spacing path.
    pub custom_pacing_enabled: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            relative_dates_enabled: true,
            custom_pacing_enabled: true,
        }
    }
}

/// Evenly spaced due-date offsets for a course's assignment-bearing sections.
///
/// A finite, replayable iterator of `(index, section key, offset)` triples.
/// Offsets are computed lazily on iteration, and a saved clone resumes from
/// the position it was cloned at. The final section's offset always lands
/// exactly on the course's expected duration.
#[derive(Debug, Clone)]
pub struct SpacedSections {
    sections: Vec<NodeKey>,
    duration: Duration,
    cursor: usize,
}

impl SpacedSections {
    fn new(sections: Vec<NodeKey>, duration: Duration) -> Self {
        Self {
            sections,
            duration,
            cursor: 0,
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new(), Duration::zero())
    }

    /// Number of qualifying sections remaining
    pub fn len(&self) -> usize {
        self.sections.len() - self.cursor
    }

    /// Whether no qualifying sections remain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for SpacedSections {
    type Item = (usize, NodeKey, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.sections.len() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        let offset = section_offset(self.duration, index, self.sections.len());
        Some((index, self.sections[index].clone(), offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for SpacedSections {}

/// Offset for the i-th of `count` qualifying sections: duration * (i+1)/count.
///
/// Multiply before dividing so the last section lands exactly on the full
/// duration instead of accumulating per-section rounding.
fn section_offset(duration: Duration, index: usize, count: usize) -> Duration {
    duration * (index as i32 + 1) / count as i32
}

/// Schedule derivation over one course content tree.
///
/// Pure reads only: the service borrows a store snapshot and a duration
/// source, and computes fresh `DateItem` lists on every call. Nothing is
/// cached or persisted between calls, so two extractions over the same
/// unmutated snapshot yield the same result.
pub struct ScheduleService<'a, S: CourseStore, D: DurationSource> {
    store: &'a S,
    durations: &'a D,
    config: ScheduleConfig,
}

impl<'a, S: CourseStore, D: DurationSource> ScheduleService<'a, S, D> {
    /// Create a service with default configuration
    pub fn new(store: &'a S, durations: &'a D) -> Self {
        Self::with_config(store, durations, ScheduleConfig::default())
    }

    /// Create a service with explicit feature configuration
    pub fn with_config(store: &'a S, durations: &'a D, config: ScheduleConfig) -> Self {
        Self {
            store,
            durations,
            config,
        }
    }

    /// The active feature configuration
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    fn node(&self, key: &NodeKey) -> Result<&CourseNode, ScheduleError> {
        self.store
            .node(key)
            .ok_or_else(|| ScheduleError::node_not_found(key.clone()))
    }

    fn require_course(&self, key: &NodeKey) -> Result<&CourseNode, ScheduleError> {
        let node = self.node(key)?;
        if node.category != Category::Course {
            return Err(ScheduleError::not_a_course(key.clone(), node.category));
        }
        Ok(node)
    }

    /// Whether the subtree below `key` contains at least one assignment.
    ///
    /// An assignment is a strict-descendant leaf with `graded == true` and a
    /// nonzero weight. Date-exempt nodes are opaque: they neither qualify
    /// nor get recursed into. Visibility is not this check's concern; hidden
    /// sections are filtered where spacing candidates are selected.
    pub fn has_assignment_blocks(&self, key: &NodeKey) -> Result<bool, ScheduleError> {
        let mut stack = self.store.children(key);
        while let Some(current) = stack.pop() {
            let node = self.node(&current)?;
            if node.category.is_date_exempt() {
                continue;
            }
            let children = self.store.children(&current);
            if children.is_empty() {
                if node.is_assignment() {
                    return Ok(true);
                }
            } else {
                stack.extend(children);
            }
        }
        Ok(false)
    }

    /// Collect due-date overrides for every graded leaf below a sequence.
    ///
    /// Leaves nested under ungraded intermediate nodes are still covered.
    /// A graded leaf with nonzero weight receives `due`; a graded leaf with
    /// zero weight is graded in name only, so its due date is explicitly
    /// cleared even when a sibling carries one. Ungraded leaves are omitted
    /// and date-exempt nodes are skipped entirely.
    pub fn gather_graded_items(
        &self,
        key: &NodeKey,
        due: Duration,
    ) -> Result<Vec<DateItem>, ScheduleError> {
        let mut items = Vec::new();
        let mut stack = self.store.children(key);
        while let Some(current) = stack.pop() {
            let node = self.node(&current)?;
            if node.category.is_date_exempt() {
                continue;
            }
            let children = self.store.children(&current);
            if !children.is_empty() {
                stack.extend(children);
                continue;
            }
            if !node.graded {
                continue;
            }
            let item = if node.weight > 0.0 {
                DateOverride::due(due)
            } else {
                DateOverride::cleared()
            };
            items.push((current, item));
        }
        Ok(items)
    }

    /// Evenly spaced due-date offsets for the course's qualifying sections.
    ///
    /// Sections are the course's top-level sequentials (through the standard
    /// chapter nesting, or sitting directly under the course) in authored
    /// order, minus anything staff-only, filtered to those with assignment
    /// blocks. The i-th of N qualifying sections is due at
    /// `expected_duration * (i+1) / N`.
    ///
    /// # Errors
    ///
    /// `MissingDuration` when qualifying sections exist but the duration
    /// source has no answer. With no qualifying sections the result is empty
    /// and the duration source is never consulted.
    pub fn spaced_out_sections(&self, course: &NodeKey) -> Result<SpacedSections, ScheduleError> {
        self.require_course(course)?;

        let mut qualifying = Vec::new();
        for section in self.top_level_sections(course)? {
            if self.has_assignment_blocks(&section)? {
                qualifying.push(section);
            }
        }
        if qualifying.is_empty() {
            return Ok(SpacedSections::empty());
        }

        let duration = self
            .durations
            .expected_duration(course)
            .ok_or_else(|| ScheduleError::missing_duration(course.clone()))?;
        tracing::debug!(
            course = %course,
            sections = qualifying.len(),
            "spacing assignment-bearing sections across expected duration"
        );
        Ok(SpacedSections::new(qualifying, duration))
    }

    /// Visible top-level sections of a course, in authored order.
    ///
    /// Flattens one chapter level; a sequential directly under the course is
    /// accepted as its own section. Staff-only chapters hide everything
    /// beneath them.
    fn top_level_sections(&self, course: &NodeKey) -> Result<Vec<NodeKey>, ScheduleError> {
        let mut sections = Vec::new();
        for child in self.store.children(course) {
            let node = self.node(&child)?;
            if node.visible_to_staff_only {
                continue;
            }
            match node.category {
                Category::Chapter => {
                    for grandchild in self.store.children(&child) {
                        let section = self.node(&grandchild)?;
                        if section.category == Category::Sequential
                            && !section.visible_to_staff_only
                        {
                            sections.push(grandchild);
                        }
                    }
                }
                Category::Sequential => sections.push(child),
                _ => {}
            }
        }
        Ok(sections)
    }

    /// Push an authored relative due date onto a node and its descendants.
    ///
    /// Every node in the subtree receives `due = num_weeks`, except
    /// date-exempt nodes, which are dropped entirely. Containers are always
    /// covered, including a vertical whose only content is an exempt node;
    /// only the exempt nodes themselves fall out.
    pub fn custom_pacing_children(
        &self,
        key: &NodeKey,
        num_weeks: u32,
    ) -> Result<Vec<DateItem>, ScheduleError> {
        let due = DateOverride::due(Duration::weeks(num_weeks as i64));
        let mut items = vec![(key.clone(), due.clone())];
        let mut stack = self.store.children(key);
        while let Some(current) = stack.pop() {
            let node = self.node(&current)?;
            if node.category.is_date_exempt() {
                continue;
            }
            stack.extend(self.store.children(&current));
            items.push((current, due.clone()));
        }
        Ok(items)
    }

    /// Derive the full date-override list for a self-paced course.
    ///
    /// The course root is always present with [`DateOverride::Defaults`].
    /// For a self-paced course with relative dates enabled, each sequential
    /// under each chapter contributes either its custom-pacing subtree or its
    /// even-spacing offset plus gathered graded leaves; a chapter that
    /// contributed anything is emitted with the full expected duration as a
    /// bare value. Output order is not significant; compare as a multiset.
    pub fn extract_dates_from_course(
        &self,
        course: &NodeKey,
    ) -> Result<Vec<DateItem>, ScheduleError> {
        let course_node = self.require_course(course)?;

        let mut items: Vec<DateItem> = vec![(course.clone(), DateOverride::Defaults)];
        if !course_node.self_paced || !self.config.relative_dates_enabled {
            tracing::debug!(
                course = %course,
                self_paced = course_node.self_paced,
                "relative dates inactive, emitting course root only"
            );
            return Ok(items);
        }

        self.store.begin_bulk_read(course);
        let result = self.extract_relative_dates(course, &mut items);
        self.store.end_bulk_read(course);
        result?;

        tracing::debug!(course = %course, items = items.len(), "extracted date overrides");
        Ok(items)
    }

    fn extract_relative_dates(
        &self,
        course: &NodeKey,
        items: &mut Vec<DateItem>,
    ) -> Result<(), ScheduleError> {
        let offsets: HashMap<NodeKey, Duration> = self
            .spaced_out_sections(course)?
            .map(|(_, section, offset)| (section, offset))
            .collect();

        for chapter_key in self.store.children(course) {
            let chapter = self.node(&chapter_key)?;
            if chapter.category != Category::Chapter {
                continue;
            }

            let mut chapter_items: Vec<DateItem> = Vec::new();
            for section_key in self.store.children(&chapter_key) {
                let section = self.node(&section_key)?;
                if section.category != Category::Sequential {
                    continue;
                }
                match section.due_num_weeks {
                    Some(weeks) if self.config.custom_pacing_enabled => {
                        chapter_items.extend(self.custom_pacing_children(&section_key, weeks)?);
                    }
                    _ => {
                        // The spacing map already encodes visibility and the
                        // assignment check; anything absent gets no dates.
                        if let Some(&offset) = offsets.get(&section_key) {
                            chapter_items.push((section_key.clone(), DateOverride::due(offset)));
                            chapter_items.extend(self.gather_graded_items(&section_key, offset)?);
                        }
                    }
                }
            }

            if chapter_items.is_empty() {
                continue;
            }
            // A dated chapter spans the whole course: bare full duration,
            // regardless of the section-level overrides beneath it.
            let duration = self
                .durations
                .expected_duration(course)
                .ok_or_else(|| ScheduleError::missing_duration(course.clone()))?;
            items.push((chapter_key, DateOverride::Bare(duration)));
            items.append(&mut chapter_items);
        }
        Ok(())
    }
}
