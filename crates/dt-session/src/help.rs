//! Help text.

/// Full usage text shown by `help`.
pub const HELP: &str = "\
Commands:
  help      - display this text
  roll      - roll the dice in any number of pools, or every pool on the table
              format: roll pool <names...> | roll table
              examples: roll pool strength, roll table
  add       - add a die to pools, or new pools to the table
              format: add die <names...> | add pool <name:XdY...>
              examples: add die strength agility, add pool power:4d6
  subtract  - take dice off pools, or pools off the table
              format: subtract die <name[:count]...> | subtract pool <names...>
              examples: subtract die strength:3 agility, subtract pool strength agility
  view      - describe pools, or every pool on the table
              format: view pool <names...> | view table
              examples: view pool strength, view table
  clear     - remove all dice from pools, or all pools from the table
              format: clear pool <names...> | clear table
              examples: clear pool strength, clear table
  set       - turn one die, every die in a pool, or every die on the table to a face
              format: set die <pool> <index> <value> | set pool <pool> <value> | set table <value>
              dice are numbered from 0
              examples: set die strength 0 6, set pool strength 3, set table 1
  describe  - attach a note to a pool, shown by view; no text removes it
              format: describe <pool> [text...]
              examples: describe strength Rolled at dawn
  exit      - leave the table (also: quit)";
