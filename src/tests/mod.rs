mod dimacs;
