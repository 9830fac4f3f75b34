//! Walk functions for tree traversal.

use crate::AstNode;

use super::Visitor;

/// Walks `node` and its descendants in pre-order.
///
/// The visitor sees `node` first. Its children are only walked when the
/// visitor returns `true` and there are children to walk.
pub fn walk<'a, V>(node: &'a AstNode, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    if !visitor.visit(node) || !node.has_children() {
        return;
    }
    walk_children(node, visitor);
}

/// Walks every child of `node` in order, without visiting `node` itself.
#[inline]
pub fn walk_children<'a, V>(node: &'a AstNode, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    for child in &node.children {
        walk(child, visitor);
    }
}
