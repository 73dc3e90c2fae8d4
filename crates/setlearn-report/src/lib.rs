//! setlearn-report: SVG output for the Venn calculator and the particle field.

pub mod svg;
