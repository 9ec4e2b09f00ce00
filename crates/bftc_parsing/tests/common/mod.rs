/// A program using every instruction, comments and blank lines
pub const PROGRAM: &str = "\
// declare everything up front
var X y
var buffer[16] $tmp

-- now use them
set x 10
set y x
inc buffer 1   # buffer names its first cell
var _counter
inc _counter 255
";
