//! Property-based tests.
//!
//! These complement the unit tests with generated inputs: the section
//! parser must be total over arbitrary text, and the aggregator's ordering
//! must hold for any section population.

mod section_order_props;
mod section_parser_props;
