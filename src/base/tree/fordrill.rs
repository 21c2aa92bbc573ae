use crate::base;

/// Renders table nodes as a tree of rows with aligned amount columns.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub grouping: base::Grouping,
    pub nodes: Vec<base::TableNode>,
}

/// Column widths shared by every line.
struct Layout {
    label: usize,
    amounts: [usize; 4],
    percent: usize,
}

impl Config {
    const CODE: &str = "Code";
    const TITLES: [&str; 4] = ["Budget", "Committed", "Paid", "Unpaid"];
    const PERCENT: &str = "Exec";
    const NO_BREAKDOWN: &str = "No breakdown available.";
    /// Spaces on either side of the dash filler.
    const FILLER_SPACES: usize = 2;
    const MIN_DASHES: usize = 2;
    const COLUMN_GAP: usize = 2;

    pub fn to_tree(&self) -> base::Tree<'_> {
        let layout = self.layout();
        let mut root = base::tree::Node::default();
        if self.nodes.is_empty() {
            return base::Tree::new(&self.charset, root);
        }
        root.push(base::tree::Node::new(self.header(&layout)));
        for node in &self.nodes {
            root.push(self.to_node(node, 0, &layout));
        }
        base::Tree::new(&self.charset, root)
    }

    fn label(&self, node: &base::TableNode) -> String {
        let badge = node.slot.dimension(self.grouping).badge();
        if node.row.name == node.row.id {
            format!("{}{}", badge, node.row.id)
        } else {
            format!("{}{} {}", badge, node.row.id, node.row.name)
        }
    }

    fn amounts(row: &base::DrillRow) -> [base::Amount; 4] {
        [row.budget, row.committed, row.paid, row.unpaid()]
    }

    fn percent(row: &base::DrillRow) -> String {
        format!("{}%", row.execution_percent())
    }

    fn layout(&self) -> Layout {
        let mut layout = Layout {
            label: Self::CODE.len() + Self::FILLER_SPACES + Self::MIN_DASHES,
            amounts: Self::TITLES.map(|t| t.len() + 1),
            percent: Self::PERCENT.len(),
        };
        let mut stack = self.nodes.iter().map(|n| (0, n)).collect::<Vec<_>>();
        while let Some((depth, node)) = stack.pop() {
            layout.label = layout.label.max(
                depth * base::Charset::INDENT
                    + self.label(node).chars().count()
                    + Self::FILLER_SPACES
                    + Self::MIN_DASHES,
            );
            for (w, a) in layout.amounts.iter_mut().zip(Self::amounts(&node.row)) {
                *w = (*w).max(a.charlen_for_alignment());
            }
            layout.percent = layout.percent.max(Self::percent(&node.row).len());
            stack.extend(node.nodes.iter().map(|n| (depth + 1, n)));
        }
        layout
    }

    fn header(&self, layout: &Layout) -> String {
        let mut s = format!("{:<w$}", Self::CODE, w = layout.label);
        for (title, w) in Self::TITLES.iter().zip(layout.amounts) {
            s.push_str(&format!("{:>w$}", format!("{} ", title), w = w));
            s.push_str(&" ".repeat(Self::COLUMN_GAP));
        }
        s.push_str(&format!("{:>w$}", Self::PERCENT, w = layout.percent));
        s
    }

    fn row_data(&self, node: &base::TableNode, depth: usize, layout: &Layout) -> String {
        let label = self.label(node);
        let dash_count = layout.label
            - depth * base::Charset::INDENT
            - label.chars().count()
            - Self::FILLER_SPACES;
        let mut s = String::with_capacity(layout.label * 2);
        s.push_str(&label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash);
        }
        s.push(' ');

        let row = &node.row;
        for (i, (amount, w)) in Self::amounts(row).into_iter().zip(layout.amounts).enumerate() {
            let mut cell = amount.to_string();
            if amount >= base::Amount::ZERO {
                cell.push(' ');
            }
            let mut cell = format!("{:>w$}", cell, w = w);
            if self.charset.color && i == 3 && row.has_unpaid_alert() {
                cell = colored::Colorize::red(cell.as_str()).to_string();
            }
            s.push_str(&cell);
            s.push_str(&" ".repeat(Self::COLUMN_GAP));
        }
        s.push_str(&format!("{:>w$}", Self::percent(row), w = layout.percent));

        if row.has_unpaid_alert() {
            let mut marker = self.charset.alert.to_string();
            if self.charset.color {
                marker = colored::Colorize::red(marker.as_str()).to_string();
            }
            s.push(' ');
            s.push_str(&marker);
        }
        s
    }

    fn to_node(&self, node: &base::TableNode, depth: usize, layout: &Layout) -> base::tree::Node {
        let mut tn = base::tree::Node::new(self.row_data(node, depth, layout));
        match &node.children {
            Some(base::Expansion::NoBreakdown) => {
                tn.push(base::tree::Node::new(Self::NO_BREAKDOWN));
            }
            Some(base::Expansion::Rows { .. }) => {
                for child in &node.nodes {
                    tn.push(self.to_node(child, depth + 1, layout));
                }
            }
            None => {}
        }
        tn
    }
}
