use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortColumn {
    Name,
    Budget,
    Committed,
    Percent,
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            column: SortColumn::Budget,
            direction: SortDirection::Desc,
        }
    }
}

impl Sort {
    /// Selecting a new column sorts it descending; selecting the active column
    /// flips the direction.
    pub fn toggle(self, column: SortColumn) -> Self {
        if column != self.column {
            return Self {
                column,
                direction: SortDirection::Desc,
            };
        }
        let direction = match self.direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        Self { column, direction }
    }

    fn compare(&self, a: &base::DrillRow, b: &base::DrillRow) -> std::cmp::Ordering {
        let ord = match self.column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Budget => a.budget.cmp(&b.budget),
            SortColumn::Committed => a.committed.cmp(&b.committed),
            SortColumn::Percent => a.paid.ratio(a.budget).total_cmp(&b.paid.ratio(b.budget)),
            SortColumn::Paid => a.paid.cmp(&b.paid),
            SortColumn::Unpaid => a.unpaid().cmp(&b.unpaid()),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    /// Stable sort.
    pub fn apply(&self, rows: &mut [base::DrillRow]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

/// Where a row is displayed: in the root table, or inside the drill level
/// opened below `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowSlot {
    Root,
    Drill {
        parent: String,
        level: base::DrillLevel,
    },
}

impl RowSlot {
    /// Dimension of the codes shown in this slot.
    pub fn dimension(&self, grouping: base::Grouping) -> base::Grouping {
        match self {
            RowSlot::Root => grouping,
            RowSlot::Drill { level, .. } => level.dimension(grouping),
        }
    }

    pub fn is_expandable(&self) -> bool {
        match self {
            RowSlot::Root => true,
            RowSlot::Drill { level, .. } => !level.is_terminal(),
        }
    }
}

/// Expanded rows, one independent set per slot. Collapsing a row leaves the
/// sets below it untouched; they are simply no longer visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    sets: std::collections::HashMap<RowSlot, std::collections::HashSet<String>>,
}

impl ExpansionState {
    pub fn is_expanded(&self, slot: &RowSlot, id: &str) -> bool {
        self.sets.get(slot).is_some_and(|s| s.contains(id))
    }

    /// Flips the expansion of row `id` in `slot`. Returns whether it is now
    /// expanded.
    pub fn toggle(&mut self, slot: &RowSlot, id: &str) -> bool {
        let set = self.sets.entry(slot.clone()).or_default();
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sets.values().all(|s| s.is_empty())
    }
}

/// A displayed row together with whatever is currently open below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    pub row: base::DrillRow,
    pub slot: RowSlot,
    pub children: Option<base::Expansion>,
    /// Nodes for `children`'s rows, in the same order.
    pub nodes: Vec<TableNode>,
}

impl TableNode {
    /// Depth-first search for the first visible row with id `id` that can be
    /// expanded.
    pub fn find_expandable<'a>(nodes: &'a [TableNode], id: &str) -> Option<&'a TableNode> {
        nodes.iter().find_map(|n| {
            if n.row.id == id && n.slot.is_expandable() {
                Some(n)
            } else {
                Self::find_expandable(&n.nodes, id)
            }
        })
    }
}

/// The top-level commitments table: one row per chapter (or subchapter in
/// detailed mode), sortable, with rows that drill down on expansion.
#[derive(Debug, Clone, Default)]
pub struct RootTable {
    grouping: base::Grouping,
    detail_level: base::DetailLevel,
    sort: Sort,
    expansion: ExpansionState,
}

impl RootTable {
    pub fn new(grouping: base::Grouping, detail_level: base::DetailLevel) -> Self {
        Self {
            grouping,
            detail_level,
            ..Default::default()
        }
    }

    pub fn grouping(&self) -> base::Grouping {
        self.grouping
    }

    pub fn detail_level(&self) -> base::DetailLevel {
        self.detail_level
    }

    #[cfg(test)]
    pub fn sort(&self) -> Sort {
        self.sort
    }

    #[cfg(test)]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Changing the grouping abandons every expanded row.
    pub fn set_grouping(&mut self, grouping: base::Grouping) {
        if grouping != self.grouping {
            self.grouping = grouping;
            self.expansion.clear();
        }
    }

    /// Changing the detail level abandons every expanded row.
    pub fn set_detail_level(&mut self, detail_level: base::DetailLevel) {
        if detail_level != self.detail_level {
            self.detail_level = detail_level;
            self.expansion.clear();
        }
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = self.sort.toggle(column);
    }

    pub fn toggle(&mut self, slot: &RowSlot, id: &str) -> bool {
        self.expansion.toggle(slot, id)
    }

    /// Root rows for `filter`, in the current sort order. Root fetches are not
    /// capped.
    pub fn rows<S, N>(
        &self,
        source: &S,
        names: &N,
        filter: &base::MetricFilter,
    ) -> Result<Vec<base::DrillRow>, base::SourceError>
    where
        S: base::MetricSource + ?Sized,
        N: base::ClassificationNames + ?Sized,
    {
        let fetch = |metric| {
            source.fetch(&base::MetricQuery {
                filter: filter.clone(),
                metric,
                limit: None,
            })
        };
        let budget = fetch(base::Metric::Budget)?;
        let committed = fetch(base::Metric::Committed)?;
        let paid_inputs = base::PaidInputs::build(filter, None);
        let treasury = source.fetch(&paid_inputs.treasury)?;
        let non_treasury = source.fetch(&paid_inputs.non_treasury).unwrap_or_else(|e| {
            log::warn!("{}, treating it as empty", e);
            base::MetricNodeSet::new()
        });
        let paid = base::MetricNodeSet::combine(&treasury, &non_treasury);

        let agg = base::Aggregator::new(names, self.grouping);
        let depth = self.detail_level.root_depth();
        let mut rows = base::DrillRow::build(
            &agg.group_root(&budget, depth),
            &agg.group_root(&committed, depth),
            &agg.group_root(&paid, depth),
        );
        self.sort.apply(&mut rows);
        Ok(rows)
    }

    /// Root rows with every expanded row's drill levels filled in.
    pub fn tree<S, N>(
        &self,
        controller: &base::DrillController<'_, S, N>,
        rows: Vec<base::DrillRow>,
    ) -> Result<Vec<TableNode>, base::DrillError>
    where
        S: base::MetricSource + ?Sized,
        N: base::ClassificationNames + ?Sized,
    {
        self.nodes(controller, rows, RowSlot::Root)
    }

    fn nodes<S, N>(
        &self,
        controller: &base::DrillController<'_, S, N>,
        rows: Vec<base::DrillRow>,
        slot: RowSlot,
    ) -> Result<Vec<TableNode>, base::DrillError>
    where
        S: base::MetricSource + ?Sized,
        N: base::ClassificationNames + ?Sized,
    {
        let mut nodes = Vec::with_capacity(rows.len());
        for row in rows {
            let start = match &slot {
                RowSlot::Root => Some(base::DrillLevel::initial(&row.id)),
                RowSlot::Drill { level, .. } => base::drill::child_level(&row.id, *level),
            };
            let mut node = TableNode {
                row,
                slot: slot.clone(),
                children: None,
                nodes: Vec::new(),
            };
            if let Some(start) = start.filter(|_| self.expansion.is_expanded(&slot, &node.row.id)) {
                let expansion = controller.expand_from(&node.row.id, start)?;
                if let base::Expansion::Rows { level, rows } = &expansion {
                    let child_slot = RowSlot::Drill {
                        parent: node.row.id.clone(),
                        level: *level,
                    };
                    node.nodes = self.nodes(controller, rows.clone(), child_slot)?;
                }
                node.children = Some(expansion);
            }
            nodes.push(node);
        }
        Ok(nodes)
    }
}
