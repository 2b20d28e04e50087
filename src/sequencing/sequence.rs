use tracing::trace;

use crate::error::Result;

/*
Sequences
=========

A sequence is a composition unit: run it, and it emits notes into whatever
context it is given. Passages, verses and whole songs are built by nesting
two combinators:

  chain(vec![a, b, c])   run a, then b, then c, once each
  repeat(s, n)           run s n times in a row

The context `C` is passed in on every run instead of being captured, so a
sequence's only side effect is on that context. Usually `C` is a `Session`
(a waveform buffer plus a step counter), but any type works.

Any closure `Fn(&mut C) -> Result<()>` is a sequence. An error stops the run
immediately; later steps in a chain or repeat do not run.

Example usage:
  let verse = chain(vec![
      phrase(a_minor, 32).boxed(),
      phrase(d_minor, 32).boxed(),
  ]);
  let song = chain(vec![verse.times(2).boxed(), chorus.boxed()]);
  song.run(&mut session)?;
*/

/// Core trait for composition units
pub trait Sequence<C: ?Sized> {
    fn run(&self, ctx: &mut C) -> Result<()>;
}

impl<C: ?Sized, F> Sequence<C> for F
where
    F: Fn(&mut C) -> Result<()>,
{
    fn run(&self, ctx: &mut C) -> Result<()> {
        self(ctx)
    }
}

/// A type-erased sequence, the element type of [`chain`].
pub type BoxedSequence<C> = Box<dyn Sequence<C>>;

/// Runs each sequence once, in order.
pub struct Chain<C: ?Sized> {
    sequences: Vec<BoxedSequence<C>>,
}

impl<C: ?Sized> Chain<C> {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl<C: ?Sized> Sequence<C> for Chain<C> {
    fn run(&self, ctx: &mut C) -> Result<()> {
        for (index, sequence) in self.sequences.iter().enumerate() {
            trace!(index, "chain step");
            sequence.run(ctx)?;
        }
        Ok(())
    }
}

pub fn chain<C: ?Sized>(sequences: Vec<BoxedSequence<C>>) -> Chain<C> {
    Chain { sequences }
}

/// Runs one sequence a fixed number of times.
pub struct Repeat<S> {
    sequence: S,
    count: usize,
}

impl<S> Repeat<S> {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<C: ?Sized, S: Sequence<C>> Sequence<C> for Repeat<S> {
    fn run(&self, ctx: &mut C) -> Result<()> {
        for pass in 0..self.count {
            trace!(pass, of = self.count, "repeat pass");
            self.sequence.run(ctx)?;
        }
        Ok(())
    }
}

pub fn repeat<S>(sequence: S, count: usize) -> Repeat<S> {
    Repeat { sequence, count }
}

/// Fluent forms of [`chain`] and [`repeat`].
pub trait SequenceExt<C: ?Sized>: Sequence<C> + Sized {
    /// Run `self`, then `next`.
    fn then<S>(self, next: S) -> Chain<C>
    where
        Self: 'static,
        S: Sequence<C> + 'static,
    {
        chain(vec![Box::new(self), Box::new(next)])
    }

    fn times(self, count: usize) -> Repeat<Self> {
        repeat(self, count)
    }

    fn boxed(self) -> BoxedSequence<C>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: ?Sized, S: Sequence<C>> SequenceExt<C> for S {}
