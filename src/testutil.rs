/// Creates an [`Address`](crate::types::address::Address) from a hex literal
/// without a `0x` prefix.
macro_rules! addr {
    ($($arg:tt)*) => {
        $crate::types::address::Address(::hex_literal::hex!($($arg)*))
    };
}
