//! Small single-role games exercising specific prover features.

/// One role presses a button to light a lamp.
///
/// `press` lights it and ends the game with 100; `wait` leaves it dark.
pub const BUTTONS: &str = r"
(role robot)
(init (lamp off))

(legal robot press)
(legal robot wait)

(<= (next (lamp on)) (does robot press))
(<= (next (lamp off)) (does robot wait))

(<= terminal (true (lamp on)))
(<= (goal robot 100) (true (lamp on)))
(<= (goal robot 0) (not (true (lamp on))))
";

/// A walk around a cyclic graph until the walker reaches `d`.
///
/// `reach` is recursive over a cycle, and `stay` is legal only on a node
/// that can reach itself.
pub const WALK: &str = r"
(role walker)
(init (at a))

(edge a b)
(edge b c)
(edge c a)
(edge c d)

(<= (reach ?x ?y) (edge ?x ?y))
(<= (reach ?x ?z) (edge ?x ?y) (reach ?y ?z))

(<= (legal walker (move ?y))
    (true (at ?x))
    (edge ?x ?y))
(<= (legal walker stay)
    (true (at ?x))
    (reach ?x ?x))

(<= (next (at ?y)) (does walker (move ?y)))
(<= (next (at ?x)) (does walker stay) (true (at ?x)))

(<= terminal (true (at d)))
(<= (goal walker 100) (true (at d)))
(<= (goal walker 0) (not (true (at d))))
";

/// Two roles moving at once; each picks `heads` or `tails`.
///
/// The matcher scores 100 if the coins agree, the mismatcher otherwise.
pub const PENNIES: &str = r"
(role matcher)
(role mismatcher)
(init (round 0))

(<= (legal ?r heads) (role ?r) (true (round 0)))
(<= (legal ?r tails) (role ?r) (true (round 0)))

(<= (next (round 1)) (true (round 0)))
(<= (next (played ?r ?c)) (does ?r ?c))

(<= same (true (played matcher ?c)) (true (played mismatcher ?c)))

(<= terminal (true (round 1)))
(<= (goal matcher 100) same)
(<= (goal matcher 0) (not same))
(<= (goal mismatcher 100) (not same))
(<= (goal mismatcher 0) same)
";
