use std::ptr;

use super::super::*;
use crate::program::ShaderProgram;

// Resolves only when `T` lacks the marker trait; a second applicable impl
// makes the call ambiguous and the test fails to compile.
trait AmbiguousIfSend<A> {
    fn check() {}
}
impl<T: ?Sized> AmbiguousIfSend<()> for T {}
struct IsSend;
impl<T: ?Sized + Send> AmbiguousIfSend<IsSend> for T {}

trait AmbiguousIfSync<A> {
    fn check() {}
}
impl<T: ?Sized> AmbiguousIfSync<()> for T {}
struct IsSync;
impl<T: ?Sized + Sync> AmbiguousIfSync<IsSync> for T {}

#[test]
fn test_native_driver_stays_on_its_thread() {
    <NativeGl as AmbiguousIfSend<_>>::check();
    <NativeGl as AmbiguousIfSync<_>>::check();
    <ShaderProgram<'static, NativeGl> as AmbiguousIfSend<_>>::check();
}

#[test]
fn test_load_without_symbols_fails() {
    let result = NativeGl::load_with(|_| ptr::null());
    assert!(matches!(result, Err(LoadError::NotLoaded)));
}
