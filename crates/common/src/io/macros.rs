/// Prints to stdout through the global [`Shell`](crate::Shell).
#[macro_export]
macro_rules! sh_print {
    ($($args:tt)*) => {
        $crate::Shell::get().print_out(::core::format_args!($($args)*))
    };
}

/// Prints a line to stdout through the global [`Shell`](crate::Shell).
#[macro_export]
macro_rules! sh_println {
    () => {
        $crate::sh_print!("\n")
    };
    ($fmt:literal $($args:tt)*) => {
        $crate::sh_print!("{}\n", ::core::format_args!($fmt $($args)*))
    };
}

/// Prints a line to stderr through the global [`Shell`](crate::Shell).
#[macro_export]
macro_rules! sh_eprintln {
    () => {
        $crate::Shell::get().print_err(::core::format_args!("\n"))
    };
    ($fmt:literal $($args:tt)*) => {
        $crate::Shell::get().print_err(::core::format_args!("{}\n", ::core::format_args!($fmt $($args)*)))
    };
}

/// Prints a warning through the global [`Shell`](crate::Shell).
#[macro_export]
macro_rules! sh_warn {
    ($($args:tt)*) => {
        $crate::Shell::get().warn(::core::format_args!($($args)*))
    };
}

/// Prints an error through the global [`Shell`](crate::Shell).
#[macro_export]
macro_rules! sh_err {
    ($($args:tt)*) => {
        $crate::Shell::get().error(::core::format_args!($($args)*))
    };
}
