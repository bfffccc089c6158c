use crate::choice;
use crate::choices::*;

choice!(InputSource,
    Manual => "Manual - Type in the coordinates of each point",
    File => "File - Read a count and coordinate pairs from a text file",
    Random => "Random - Generate a cloud of uniformly distributed points"
);

choice!(Execution,
    Sequential => "Sequential - Search on the current thread",
    Parallel => "Parallel - Split large searches across threads"
);
