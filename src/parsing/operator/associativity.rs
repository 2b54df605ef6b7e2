
/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Associativity {
  right_assoc: bool,
}

impl Associativity {
  /// Indicates an operator which associates to the left, so that
  /// `a # b # c` groups as `(a # b) # c`.
  pub const LEFT: Associativity = Associativity {
    right_assoc: false,
  };
  /// Indicates an operator which associates to the right, so that
  /// `a # b # c` groups as `a # (b # c)`.
  pub const RIGHT: Associativity = Associativity {
    right_assoc: true,
  };
  pub const fn is_left_assoc(self) -> bool {
    !self.right_assoc
  }
}
