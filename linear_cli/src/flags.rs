xflags::xflags! {
    /// Build the linear containers from command line values and print them.
    cmd linear {
        /// Add every value last, then drain the list from the back.
        cmd singly {
            repeated values: u32
        }
        /// Build a doubly linked list, optionally removing one position.
        cmd doubly {
            repeated values: u32
            /// Position to remove after building the list.
            optional --remove-at index: usize
        }
        /// Append every value to a dynamic array.
        cmd array {
            repeated values: u32
            /// Initial capacity of the backing store.
            optional -c, --capacity capacity: usize
        }
    }
}
